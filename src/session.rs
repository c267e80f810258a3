//! Request-scoped unit of work.
//!
//! A `Session` wraps one transaction. Handlers receive it as an extractor, do their
//! reads and writes through [`Session::conn`], and finish with [`Session::settle`].
//! A session dropped on an early return rolls back and hands its connection back
//! to the pool.

use crate::error::{AppError, StoreError};
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{PgConnection, Postgres, Transaction};

pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub(crate) fn new(tx: Transaction<'static, Postgres>) -> Self {
        tracing::debug!("session opened");
        Session { tx }
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await?;
        tracing::debug!("session committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        tracing::debug!("session rolled back");
        Ok(())
    }

    /// Commit when `outcome` is `Ok`, roll back when it is `Err`.
    ///
    /// A failing commit is returned as the error. A failing rollback is logged and
    /// the original error is returned.
    pub async fn settle<T>(self, outcome: Result<T, StoreError>) -> Result<T, StoreError> {
        match outcome {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(state.store.begin().await?)
    }
}
