//! Typed machine names for generated pillar content types.

use std::fmt;

use thiserror::Error;

use crate::content::MAX_MACHINE_NAME_LEN;
use crate::models::ItemId;

/// Machine-name prefix shared by every generated pillar content type.
pub const TYPE_KEY_PREFIX: &str = "pillar-page-";

/// Error building a pillar type key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeKeyError {
    /// The decimal item ID pushes the key past the machine-name limit.
    #[error("type key for item {id} would be {len} characters, limit is {MAX_MACHINE_NAME_LEN}")]
    TooLong { id: ItemId, len: usize },
}

/// Machine name for a generated pillar content type.
///
/// Always of the form `pillar-page-{id}`. The platform caps machine names
/// at 20 characters, which is why the prefix is this short — and why IDs
/// above eight decimal digits are rejected at construction instead of
/// producing a key the registry would refuse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PillarTypeKey {
    id: ItemId,
    key: String,
}

impl PillarTypeKey {
    /// Build the key for an item ID, enforcing the machine-name length cap.
    pub fn new(id: ItemId) -> Result<Self, TypeKeyError> {
        let key = format!("{TYPE_KEY_PREFIX}{id}");
        if key.len() > MAX_MACHINE_NAME_LEN {
            return Err(TypeKeyError::TooLong { id, len: key.len() });
        }
        Ok(Self { id, key })
    }

    /// The source item ID.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The machine name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for PillarTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
