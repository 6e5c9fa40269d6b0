mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, dir, entry, file, link};

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::{FsEntry, LinkTarget};

/// Read-only view of a filesystem, as much as traversal needs.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List `dir` in whatever order the underlying filesystem returns.
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Resolve `path` to its real location. Only consulted when following links.
    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Resolve the symbolic link at `path` to the kind of entry it points at.
    async fn follow_link(&self, path: &Path) -> io::Result<LinkTarget>;
}
