//! Item store abstraction.
//!
//! The kernel reads content items through the [`ItemStore`] trait; the
//! Postgres implementation lives here and in-memory implementations for
//! tests live in `pilastro-test-utils`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Item, ItemId, ItemStatus};

/// Read access to content items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Publication status for an item. `None` when no such item exists.
    async fn status(&self, id: ItemId) -> Result<Option<ItemStatus>>;

    /// Load a full item record. `None` when no such item exists.
    async fn load(&self, id: ItemId) -> Result<Option<Item>>;
}

/// Postgres-backed item store.
#[derive(Clone)]
pub struct SqlItemStore {
    pool: PgPool,
}

impl SqlItemStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for SqlItemStore {
    async fn status(&self, id: ItemId) -> Result<Option<ItemStatus>> {
        // IDs beyond the signed 64-bit range cannot exist in the database.
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let row: Option<(i16,)> = sqlx::query_as("SELECT status FROM item WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to fetch item status")?;

        Ok(row.map(|(status,)| ItemStatus::from_i16(status)))
    }

    async fn load(&self, id: ItemId) -> Result<Option<Item>> {
        let Ok(id) = i64::try_from(id) else {
            return Ok(None);
        };

        let row: Option<(i64, String, String, i16, i64, i64)> = sqlx::query_as(
            "SELECT id, title, slug, status, created, changed FROM item WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch item")?;

        row.map(|(id, title, slug, status, created, changed)| {
            Ok(Item {
                id: u64::try_from(id).context("negative item ID in database")?,
                title,
                slug,
                status: ItemStatus::from_i16(status),
                created,
                changed,
            })
        })
        .transpose()
    }
}
