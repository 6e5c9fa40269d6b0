use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::core::content_type;
use crate::error::{AssetError, Result};
use crate::models::{UploadObject, UploadPlan};

const INDEX_DOCUMENT: &str = "index.html";

/// Pair each enumerated file with its destination key and content type.
///
/// Keys are the path below `root` joined with `/`, optionally placed under
/// `key_prefix`. Object order follows `files`.
pub fn plan_uploads(
    root: &Path,
    files: Vec<PathBuf>,
    key_prefix: Option<&str>,
) -> Result<UploadPlan> {
    let prefix = key_prefix
        .map(|prefix| prefix.trim_matches('/'))
        .filter(|prefix| !prefix.is_empty());

    let mut index_document = None;
    let mut objects = Vec::with_capacity(files.len());

    for source in files {
        let relative = source
            .strip_prefix(root)
            .map_err(|_| AssetError::OutsideRoot {
                path: source.clone(),
                root: root.to_path_buf(),
            })?;

        let relative_key = object_key(relative).ok_or_else(|| AssetError::NonUtf8Path {
            path: source.clone(),
        })?;
        let key = match prefix {
            Some(prefix) => format!("{prefix}/{relative_key}"),
            None => relative_key,
        };

        if relative == Path::new(INDEX_DOCUMENT) {
            index_document = Some(key.clone());
        }

        objects.push(UploadObject {
            content_type: content_type::for_path(&source).map(str::to_owned),
            key,
            source,
        });
    }

    if index_document.is_none() && !objects.is_empty() {
        warn!(root = %root.display(), "no {INDEX_DOCUMENT} at the root of the upload");
    }

    Ok(UploadPlan {
        root: root.to_path_buf(),
        index_document,
        objects,
    })
}

/// `None` when any component is not valid UTF-8.
fn object_key(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}
