//! Content type registry.
//!
//! Holds the content type definitions currently known to the platform.
//! Generated types are re-registered from configuration on every init event
//! rather than diffed against previous state, so the registry is upsert-only
//! and holds no persisted record between processes.

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

use super::types::ContentTypeDefinition;

/// Platform limit on content type machine names.
pub const MAX_MACHINE_NAME_LEN: usize = 20;

/// Error registering a content type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("machine name must not be empty")]
    EmptyName,

    #[error("machine name {name:?} is {len} characters, limit is {MAX_MACHINE_NAME_LEN}")]
    NameTooLong { name: String, len: usize },

    #[error("machine name {name:?} contains characters outside [a-z0-9_-]")]
    InvalidName { name: String },
}

/// Registry of content types.
///
/// Cheap to clone; all clones share the same underlying map.
#[derive(Clone, Default)]
pub struct ContentTypeRegistry {
    inner: Arc<ContentTypeRegistryInner>,
}

#[derive(Default)]
struct ContentTypeRegistryInner {
    types: DashMap<String, ContentTypeDefinition>,
}

impl ContentTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in types.
    pub fn with_builtin_types() -> Self {
        let registry = Self::new();
        let post = ContentTypeDefinition::builtin_post();
        registry
            .inner
            .types
            .insert(post.machine_name.clone(), post);
        registry
    }

    /// Register a content type definition.
    ///
    /// Re-registering an existing machine name overwrites its definition, so
    /// repeated registration from the same state is harmless.
    pub fn register(&self, def: ContentTypeDefinition) -> Result<(), RegisterError> {
        validate_machine_name(&def.machine_name)?;
        debug!(type_name = %def.machine_name, "registered content type");
        self.inner.types.insert(def.machine_name.clone(), def);
        Ok(())
    }

    /// Get a content type by machine name.
    pub fn get(&self, machine_name: &str) -> Option<ContentTypeDefinition> {
        self.inner.types.get(machine_name).map(|r| r.clone())
    }

    /// List all content types.
    pub fn list(&self) -> Vec<ContentTypeDefinition> {
        self.inner.types.iter().map(|r| r.value().clone()).collect()
    }

    /// List registered machine names.
    pub fn type_names(&self) -> Vec<String> {
        self.inner.types.iter().map(|r| r.key().clone()).collect()
    }

    /// Check if a content type exists.
    pub fn exists(&self, machine_name: &str) -> bool {
        self.inner.types.contains_key(machine_name)
    }

    /// Number of registered content types.
    pub fn len(&self) -> usize {
        self.inner.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.types.is_empty()
    }

    /// Remove all registered content types.
    pub fn clear(&self) {
        self.inner.types.clear();
    }
}

fn validate_machine_name(name: &str) -> Result<(), RegisterError> {
    if name.is_empty() {
        return Err(RegisterError::EmptyName);
    }
    if name.len() > MAX_MACHINE_NAME_LEN {
        return Err(RegisterError::NameTooLong {
            name: name.to_string(),
            len: name.len(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(RegisterError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
