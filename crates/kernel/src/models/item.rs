//! Item model — the platform's content records.

use serde::{Deserialize, Serialize};

/// Numeric identifier for content items.
pub type ItemId = u64;

/// Publication status of an item.
///
/// A *missing* item is not a status: stores report it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Published,
    Unpublished,
}

impl ItemStatus {
    /// Map the database representation (0 = unpublished, 1 = published).
    pub fn from_i16(status: i16) -> Self {
        if status == 1 {
            Self::Published
        } else {
            Self::Unpublished
        }
    }

    /// The database representation.
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Published => 1,
            Self::Unpublished => 0,
        }
    }
}

/// Content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique numeric identifier.
    pub id: ItemId,

    /// Item title.
    pub title: String,

    /// URL slug.
    pub slug: String,

    /// Publication status.
    pub status: ItemStatus,

    /// Unix timestamp when created.
    pub created: i64,

    /// Unix timestamp when last changed.
    pub changed: i64,
}

impl Item {
    /// Check if this item is published.
    pub fn is_published(&self) -> bool {
        self.status == ItemStatus::Published
    }
}
