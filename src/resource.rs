//! The contract shared by users and ads: four store operations, a typed patch,
//! and how store failures read to a client.

use crate::error::{AppError, StoreError};
use crate::validation::Validate;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::PgConnection;

#[async_trait]
pub trait Resource: Serialize + Send + Sync + Sized + 'static {
    /// Body accepted on create; every field required.
    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    /// Body accepted on update; every field optional.
    type Patch: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Used in log lines.
    const NAME: &'static str;

    fn not_found() -> AppError;

    /// Translate a failed write. Constraint violations become client errors;
    /// anything else stays an internal store error.
    fn write_error(err: StoreError) -> AppError;

    async fn insert(conn: &mut PgConnection, input: &Self::Create) -> Result<i32, StoreError>;

    async fn fetch(conn: &mut PgConnection, id: i32) -> Result<Option<Self>, StoreError>;

    /// Overwrite only the fields supplied in `patch`.
    fn apply(&mut self, patch: Self::Patch);

    /// Persist the mutable columns and return the stored row, or `None` if the
    /// row was deleted after it was fetched.
    async fn save(&self, conn: &mut PgConnection) -> Result<Option<Self>, StoreError>;

    /// Returns false when no row had this id.
    async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, StoreError>;
}
