//! PostgreSQL pool, table DDL and database bootstrap.
//!
//! The `Store` is built once by `main`, handed to the router through `AppState`,
//! and closed explicitly after the server stops.

use crate::config::DatabaseSettings;
use crate::error::{AppError, StoreError};
use crate::session::Session;
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS ad_users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL UNIQUE,
        password VARCHAR(100) NOT NULL,
        registration_time TIMESTAMP NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ad_ad (
        id SERIAL PRIMARY KEY,
        header VARCHAR(100) NOT NULL,
        description VARCHAR(200) NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT NOW(),
        user_id INTEGER NOT NULL REFERENCES ad_users (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_ad_ad_header ON ad_ad (header)",
    "CREATE INDEX IF NOT EXISTS ix_ad_ad_user_id ON ad_ad (user_id)",
];

#[derive(Clone, Debug)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, AppError> {
        let options = settings.connect_options()?;
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await
            .map_err(StoreError::from)?;
        Ok(Store { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Store { pool }
    }

    /// Create both tables and their indexes when absent. Safe to call on every start.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for ddl in SCHEMA {
            tracing::debug!(sql = %ddl.trim(), "schema");
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Open a transaction for one request.
    pub async fn begin(&self) -> Result<Session, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Session::new(tx))
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("store closed");
    }
}

/// Ensure the configured database exists; create it if not. Connects to the
/// maintenance `postgres` database to run CREATE DATABASE. Call before `Store::connect`.
pub async fn ensure_database_exists(settings: &DatabaseSettings) -> Result<(), AppError> {
    let options = settings.connect_options()?;
    let db_name = options.get_database().unwrap_or_default().to_string();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn = options
        .database("postgres")
        .connect()
        .await
        .map_err(StoreError::from)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(StoreError::from)?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(StoreError::from)?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
