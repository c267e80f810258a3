//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Storage failures, with constraint violations split out so handlers can translate them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("duplicate key violates constraint {constraint}")]
    DuplicateKey { constraint: String },
    #[error("foreign key violation on constraint {constraint}")]
    ForeignKey {
        constraint: String,
        /// The referencing value, when the caller attached it.
        key: Option<i32>,
    },
    #[error("integrity violation: {0}")]
    Integrity(String),
    #[error("database: {0}")]
    Sqlx(sqlx::Error),
}

impl StoreError {
    /// True for any constraint violation reported by the database.
    pub fn is_integrity(&self) -> bool {
        !matches!(self, StoreError::Sqlx(_))
    }

    /// Record which referencing value a foreign-key violation was about.
    /// Other variants pass through unchanged.
    pub fn with_foreign_key(self, value: i32) -> Self {
        match self {
            StoreError::ForeignKey { constraint, .. } => StoreError::ForeignKey {
                constraint,
                key: Some(value),
            },
            other => other,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let sqlx::Error::Database(db) = &err else {
            return StoreError::Sqlx(err);
        };
        let constraint = db.constraint().unwrap_or_default().to_string();
        match db.kind() {
            ErrorKind::UniqueViolation => StoreError::DuplicateKey { constraint },
            ErrorKind::ForeignKeyViolation => StoreError::ForeignKey {
                constraint,
                key: None,
            },
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                StoreError::Integrity(db.message().to_string())
            }
            _ => StoreError::Sqlx(err),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                "internal server error".to_string()
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "store error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(error_body(message))).into_response()
    }
}
