pub mod content_type;
pub mod enumerate;
pub mod patterns;
pub mod plan;
pub mod render;
