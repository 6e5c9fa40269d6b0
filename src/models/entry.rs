use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

/// One row of a directory listing. `kind` describes the entry itself;
/// symbolic links are reported as `Symlink`, never resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// What a symbolic link resolves to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinkTarget {
    pub canonical: PathBuf,
    pub kind: EntryKind,
}
