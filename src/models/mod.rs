//! Persisted entities and their store operations.

mod ad;
mod user;
pub use ad::Ad;
pub use user::User;
