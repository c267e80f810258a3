//! Ads: the `ad_ad` table and its `Resource` implementation.

use crate::error::{AppError, StoreError};
use crate::resource::Resource;
use crate::validation::{CreateAd, UpdateAd};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgConnection};

/// Row of `ad_ad`, owned by a user through `user_id`.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Ad {
    pub id: i32,
    pub header: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub user_id: i32,
}

#[async_trait]
impl Resource for Ad {
    type Create = CreateAd;
    type Patch = UpdateAd;

    const NAME: &'static str = "ad";

    fn not_found() -> AppError {
        AppError::NotFound("Ad not found".into())
    }

    fn write_error(err: StoreError) -> AppError {
        match err {
            StoreError::ForeignKey {
                key: Some(user_id), ..
            } => AppError::BadRequest(format!("user {} does not exist", user_id)),
            StoreError::ForeignKey { key: None, .. } => {
                AppError::BadRequest("ad owner does not exist".into())
            }
            StoreError::DuplicateKey { .. } | StoreError::Integrity(_) => {
                tracing::debug!(error = %err, "ad write rejected");
                AppError::BadRequest("invalid ad data".into())
            }
            StoreError::Sqlx(_) => AppError::Store(err),
        }
    }

    async fn insert(conn: &mut PgConnection, input: &CreateAd) -> Result<i32, StoreError> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO ad_ad (header, description, user_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.header)
        .bind(&input.description)
        .bind(input.user_id)
        .fetch_one(conn)
        .await
        .map_err(|e| StoreError::from(e).with_foreign_key(input.user_id))?;
        Ok(id)
    }

    async fn fetch(conn: &mut PgConnection, id: i32) -> Result<Option<Self>, StoreError> {
        let ad = sqlx::query_as::<_, Ad>(
            "SELECT id, header, description, created_at, user_id FROM ad_ad WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(ad)
    }

    fn apply(&mut self, patch: UpdateAd) {
        if let Some(header) = patch.header.into_value() {
            self.header = header;
        }
        if let Some(description) = patch.description.into_value() {
            self.description = description;
        }
        if let Some(user_id) = patch.user_id.into_value() {
            self.user_id = user_id;
        }
    }

    async fn save(&self, conn: &mut PgConnection) -> Result<Option<Self>, StoreError> {
        let ad = sqlx::query_as::<_, Ad>(
            r#"
            UPDATE ad_ad SET header = $2, description = $3, user_id = $4
            WHERE id = $1
            RETURNING id, header, description, created_at, user_id
            "#,
        )
        .bind(self.id)
        .bind(&self.header)
        .bind(&self.description)
        .bind(self.user_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| StoreError::from(e).with_foreign_key(self.user_id))?;
        Ok(ad)
    }

    async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM ad_ad WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
