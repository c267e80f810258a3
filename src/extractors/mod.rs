//! Request extractors that turn rejections into `AppError` bodies.

pub mod id;
pub mod json;
pub use id::ResourceId;
pub use json::ValidJson;
