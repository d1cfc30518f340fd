//! Persisted pillar page configuration.

use anyhow::Result;
use tracing::debug;

use crate::models::ItemId;
use crate::variables::VariableStore;

/// Variable name holding the comma-separated pillar post IDs.
pub const POST_IDS_VAR: &str = "pillar_pages.post_ids";

/// The persisted pillar configuration.
///
/// Stored as a single comma-separated string of item IDs. The string is
/// sanitized before writes but only loosely validated: duplicates, empty
/// tokens, and stale IDs all survive in storage and are re-checked on
/// every read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PillarConfig {
    pub post_ids: String,
}

impl PillarConfig {
    /// Wrap a raw ID list.
    pub fn new(post_ids: impl Into<String>) -> Self {
        Self {
            post_ids: post_ids.into(),
        }
    }

    /// Load the configuration from the variable store.
    ///
    /// A variable that has never been set is an empty configuration, not
    /// an error.
    pub async fn load(store: &dyn VariableStore) -> Result<Self> {
        let post_ids = store.get(POST_IDS_VAR).await?.unwrap_or_default();
        Ok(Self { post_ids })
    }

    /// Sanitize and persist the configuration.
    pub async fn save(&self, store: &dyn VariableStore) -> Result<()> {
        store
            .set(POST_IDS_VAR, &sanitize_post_ids(&self.post_ids))
            .await
    }

    /// Parse the configured IDs in order.
    ///
    /// Duplicates are preserved. Tokens that do not parse as decimal IDs
    /// (including the empty tokens doubled commas leave behind) are
    /// dropped here; downstream they are indistinguishable from stale
    /// references.
    pub fn ids(&self) -> Vec<ItemId> {
        self.post_ids
            .split(',')
            .filter_map(|token| match token.trim().parse::<ItemId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    if !token.is_empty() {
                        debug!(token, "dropping unparseable pillar ID token");
                    }
                    None
                }
            })
            .collect()
    }
}

/// Strip everything except ASCII digits and commas.
///
/// Applied at the write boundary; the read path still tolerates raw
/// strings that never went through it.
pub fn sanitize_post_ids(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect()
}
