//! HTTP handlers for the user and ad resources.

pub mod resource;
pub use resource::*;
