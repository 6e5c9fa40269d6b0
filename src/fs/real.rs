use async_trait::async_trait;
use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::{EntryKind, FsEntry, LinkTarget};

use super::FileSystem;

pub struct RealFileSystem;

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut listing = fs::read_dir(dir).await?;
        let mut entries = Vec::new();

        while let Some(entry) = listing.next_entry().await? {
            let file_type = entry.file_type().await?;
            entries.push(FsEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: kind_of(file_type),
            });
        }

        Ok(entries)
    }

    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path).await
    }

    async fn follow_link(&self, path: &Path) -> io::Result<LinkTarget> {
        let canonical = fs::canonicalize(path).await?;
        let metadata = fs::metadata(&canonical).await?;

        Ok(LinkTarget {
            canonical,
            kind: kind_of(metadata.file_type()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn lists_files_and_directories_with_full_paths() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("static")).unwrap();
        std::fs::write(temp.path().join("index.html"), "<html>").unwrap();

        let mut entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "index.html");
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].path, temp.path().join("index.html"));
        assert_eq!(entries[1].name, "static");
        assert_eq!(entries[1].kind, EntryKind::Directory);
    }

    #[tokio::test]
    async fn missing_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = RealFileSystem
            .read_dir(&temp.path().join("missing"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinks_are_listed_unresolved_and_followed_on_request() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir(root.join("target")).unwrap();
        std::os::unix::fs::symlink(root.join("target"), root.join("link")).unwrap();

        let entries = RealFileSystem.read_dir(root).await.unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert_eq!(link.kind, EntryKind::Symlink);

        let target = RealFileSystem.follow_link(&link.path).await.unwrap();
        assert_eq!(target.kind, EntryKind::Directory);
        assert_eq!(
            target.canonical,
            std::fs::canonicalize(root.join("target")).unwrap()
        );
    }
}
