//! Users: the `ad_users` table and its `Resource` implementation.

use crate::error::{AppError, StoreError};
use crate::resource::Resource;
use crate::validation::{CreateUser, UpdateUser};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgConnection};

/// Row of `ad_users`. Serializes without the password.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub registration_time: NaiveDateTime,
}

#[async_trait]
impl Resource for User {
    type Create = CreateUser;
    type Patch = UpdateUser;

    const NAME: &'static str = "user";

    fn not_found() -> AppError {
        AppError::NotFound("User not found".into())
    }

    fn write_error(err: StoreError) -> AppError {
        if err.is_integrity() {
            tracing::debug!(error = %err, "user write rejected");
            return AppError::Conflict("User already exists".into());
        }
        AppError::Store(err)
    }

    async fn insert(conn: &mut PgConnection, input: &CreateUser) -> Result<i32, StoreError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO ad_users (name, password) VALUES ($1, $2) RETURNING id")
                .bind(&input.name)
                .bind(&input.password)
                .fetch_one(conn)
                .await?;
        Ok(id)
    }

    async fn fetch(conn: &mut PgConnection, id: i32) -> Result<Option<Self>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, password, registration_time FROM ad_users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(user)
    }

    fn apply(&mut self, patch: UpdateUser) {
        if let Some(name) = patch.name.into_value() {
            self.name = name;
        }
        if let Some(password) = patch.password.into_value() {
            self.password = password;
        }
    }

    async fn save(&self, conn: &mut PgConnection) -> Result<Option<Self>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE ad_users SET name = $2, password = $3
            WHERE id = $1
            RETURNING id, name, password, registration_time
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.password)
        .fetch_optional(conn)
        .await?;
        Ok(user)
    }

    async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM ad_users WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
