use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry, LinkTarget};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Listing {
    Ok(Vec<FsEntry>),
    Err(io::ErrorKind, String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Listing>,
    canonical: HashMap<PathBuf, PathBuf>,
    links: HashMap<PathBuf, LinkTarget>,
    calls: Vec<PathBuf>,
}

pub fn file(path: &str) -> FsEntry {
    entry(path, EntryKind::File)
}

pub fn dir(path: &str) -> FsEntry {
    entry(path, EntryKind::Directory)
}

pub fn link(path: &str) -> FsEntry {
    entry(path, EntryKind::Symlink)
}

pub fn entry(path: &str, kind: EntryKind) -> FsEntry {
    let path = PathBuf::from(path);
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    FsEntry { path, name, kind }
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(dir.into(), Listing::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, kind: io::ErrorKind, message: &str) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .listings
            .insert(dir.into(), Listing::Err(kind, message.to_owned()));
    }

    /// Register a symbolic link. The link target also becomes the canonical
    /// form of `link`.
    pub fn set_link(&self, link: impl Into<PathBuf>, target: impl Into<PathBuf>, kind: EntryKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        let link = link.into();
        let canonical = target.into();
        inner.canonical.insert(link.clone(), canonical.clone());
        inner.links.insert(link, LinkTarget { canonical, kind });
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Listing::Ok(entries)) => Ok(entries.clone()),
            Some(Listing::Err(kind, message)) => Err(io::Error::new(*kind, message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock listing for {}", dir.display()),
            )),
        }
    }

    async fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        Ok(inner
            .canonical
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_path_buf()))
    }

    async fn follow_link(&self, path: &Path) -> io::Result<LinkTarget> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.links.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("dangling link {}", path.display()),
            )
        })
    }
}
