//! Pilastro test utilities.
//!
//! In-memory store implementations and item fixtures for integration
//! tests. The memory stores honor the same contracts as the SQL stores,
//! so tests exercise the real kernel services with no database.

use std::collections::{HashMap, HashSet};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use parking_lot::RwLock;

use pilastro_kernel::content::ItemStore;
use pilastro_kernel::models::{Item, ItemId, ItemStatus};
use pilastro_kernel::variables::VariableStore;

/// Create a published test item.
pub fn test_item(id: ItemId, title: &str, slug: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        slug: slug.to_string(),
        status: ItemStatus::Published,
        created: 0,
        changed: 0,
    }
}

/// In-memory variable store.
#[derive(Default)]
pub struct MemoryVariableStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryVariableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single variable.
    pub fn with_variable(name: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .write()
            .insert(name.to_string(), value.to_string());
        store
    }
}

#[async_trait]
impl VariableStore for MemoryVariableStore {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(name).cloned())
    }

    async fn set(&self, name: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// In-memory item store.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<HashMap<ItemId, Item>>,
    broken: RwLock<HashSet<ItemId>>,
}

impl MemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item.
    pub fn insert(&self, item: Item) {
        self.items.write().insert(item.id, item);
    }

    /// Remove an item, simulating deletion from the content store.
    pub fn remove(&self, id: ItemId) {
        self.items.write().remove(&id);
    }

    /// Make lookups for an ID fail, simulating a backend error.
    pub fn break_id(&self, id: ItemId) {
        self.broken.write().insert(id);
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn status(&self, id: ItemId) -> Result<Option<ItemStatus>> {
        if self.broken.read().contains(&id) {
            return Err(anyhow!("store failure for item {id}"));
        }
        Ok(self.items.read().get(&id).map(|item| item.status))
    }

    async fn load(&self, id: ItemId) -> Result<Option<Item>> {
        if self.broken.read().contains(&id) {
            return Err(anyhow!("store failure for item {id}"));
        }
        Ok(self.items.read().get(&id).cloned())
    }
}
