//! adboard: users and classified ads over a JSON REST API backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod resource;
pub mod response;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError, StoreError};
pub use models::{Ad, User};
pub use resource::Resource;
pub use routes::app;
pub use session::Session;
pub use state::AppState;
pub use store::{ensure_database_exists, Store};
