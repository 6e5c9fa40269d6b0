use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::patterns::ExcludeSet;
use crate::error::{AssetError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::models::{EntryKind, FsEntry};

#[derive(Debug, Clone, Default)]
pub struct EnumerateOptions {
    /// Pipe-separated names or globs to skip (e.g. "node_modules|*.map")
    pub exclude_pattern: Option<String>,
    /// Descend through symbolic links instead of reporting them as files
    pub follow_links: bool,
}

/// List every file under `root` on the local filesystem.
///
/// Shorthand for [`list_files`] with [`RealFileSystem`] and default options.
pub async fn enumerate(root: &Path) -> Result<Vec<PathBuf>> {
    list_files(&RealFileSystem, root, &EnumerateOptions::default()).await
}

/// Collect the path of every file beneath `root`, depth first.
///
/// Siblings come out in the order `fs` lists them; nothing is sorted.
/// Directories are never part of the result. Any directory that cannot be
/// listed, the root included, fails the whole call.
///
/// Symbolic links are reported as files unless `follow_links` is set, in
/// which case they are resolved and directories already visited under
/// another path are skipped.
pub async fn list_files<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: &EnumerateOptions,
) -> Result<Vec<PathBuf>> {
    let exclude = options
        .exclude_pattern
        .as_deref()
        .map(ExcludeSet::parse)
        .transpose()?
        .filter(|set| !set.is_empty());
    let mut visited = options.follow_links.then(HashSet::new);

    let mut files = Vec::new();
    let mut pending = Vec::new();
    if let Some(entries) = descend(fs, root, visited.as_mut()).await? {
        pending.push(entries.into_iter());
    }

    // Each element is the unfinished remainder of one directory listing; the
    // last one belongs to the deepest directory entered so far.
    while let Some(listing) = pending.last_mut() {
        let Some(entry) = listing.next() else {
            pending.pop();
            continue;
        };

        if let Some(exclude) = &exclude
            && exclude.is_excluded(&entry.name)
        {
            debug!(path = %entry.path.display(), "excluded");
            continue;
        }

        match entry.kind {
            EntryKind::File => files.push(entry.path),
            EntryKind::Directory => {
                if let Some(entries) = descend(fs, &entry.path, visited.as_mut()).await? {
                    pending.push(entries.into_iter());
                }
            }
            EntryKind::Symlink if options.follow_links => match fs.follow_link(&entry.path).await {
                Ok(target) => match target.kind {
                    EntryKind::Directory => {
                        if let Some(entries) = descend(fs, &entry.path, visited.as_mut()).await? {
                            pending.push(entries.into_iter());
                        }
                    }
                    EntryKind::File => files.push(entry.path),
                    EntryKind::Symlink | EntryKind::Other => {
                        debug!(path = %entry.path.display(), "skipping link to special file");
                    }
                },
                Err(err) => {
                    debug!(path = %entry.path.display(), error = %err, "unresolvable link");
                    files.push(entry.path);
                }
            },
            EntryKind::Symlink => files.push(entry.path),
            EntryKind::Other => {
                debug!(path = %entry.path.display(), "skipping special file");
            }
        }
    }

    Ok(files)
}

/// List `dir`, or return `None` when it was already visited under another
/// path. `visited` is only tracked while following links.
async fn descend<F: FileSystem>(
    fs: &F,
    dir: &Path,
    visited: Option<&mut HashSet<PathBuf>>,
) -> Result<Option<Vec<FsEntry>>> {
    let unreadable = |source: io::Error| AssetError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    if let Some(visited) = visited {
        let canonical = fs.canonicalize(dir).await.map_err(unreadable)?;
        if !visited.insert(canonical.clone()) {
            warn!(
                path = %dir.display(),
                target = %canonical.display(),
                "directory already visited, skipping link cycle"
            );
            return Ok(None);
        }
    }

    let entries = fs.read_dir(dir).await.map_err(unreadable)?;
    debug!(path = %dir.display(), entries = entries.len(), "listed directory");
    Ok(Some(entries))
}
