mod asset;
mod entry;

pub use asset::{UploadObject, UploadPlan};
pub use entry::{EntryKind, FsEntry, LinkTarget};
