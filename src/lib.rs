//! Enumerate the files of a build output directory and plan their upload to
//! a content store.

pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use crate::core::enumerate::{EnumerateOptions, enumerate, list_files};
pub use crate::core::plan::plan_uploads;
pub use error::{AssetError, Result};
