//! Key-value variable storage.
//!
//! Variables are small persisted configuration values keyed by name. All
//! reads and writes go through the [`VariableStore`] trait so hosts can swap
//! the backing store without changing call sites.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistent key-value configuration storage.
#[async_trait]
pub trait VariableStore: Send + Sync {
    /// Fetch a variable. `None` when it has never been set.
    async fn get(&self, name: &str) -> Result<Option<String>>;

    /// Set a variable, overwriting any previous value.
    async fn set(&self, name: &str, value: &str) -> Result<()>;
}

/// Postgres-backed variable store.
#[derive(Clone)]
pub struct SqlVariableStore {
    pool: PgPool,
}

impl SqlVariableStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VariableStore for SqlVariableStore {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM variable WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .context("failed to fetch variable")?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, name: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO variable (name, value) VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .context("failed to store variable")?;

        Ok(())
    }
}
