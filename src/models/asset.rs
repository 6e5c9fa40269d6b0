use std::path::PathBuf;

use serde::Serialize;

/// A single file paired with where it lands in the content store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UploadObject {
    pub source: PathBuf,
    pub key: String,
    pub content_type: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UploadPlan {
    pub root: PathBuf,
    /// Key of `index.html` directly under the root, served as the default
    /// root object and as the 403/404 fallback.
    pub index_document: Option<String>,
    pub objects: Vec<UploadObject>,
}
