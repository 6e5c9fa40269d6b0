use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while enumerating and planning assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{} is not under root {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("{} cannot be used as an object key: not valid UTF-8", path.display())]
    NonUtf8Path { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, AssetError>;
