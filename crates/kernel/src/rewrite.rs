//! Rewrite rules mapping URL paths to content types.
//!
//! The table is rebuilt from the type registry on activation and on
//! configuration changes — never per request. A rebuild drops the previous
//! table entirely, so it is idempotent and safe to re-run; until it runs,
//! routes for newly registered types simply do not resolve.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::content::ContentTypeRegistry;

/// A single rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    /// Leading path segment — the content type's slug.
    pub slug: String,

    /// Machine name of the content type that owns the path.
    pub item_type: String,
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Machine name of the owning content type.
    pub item_type: String,

    /// Remaining path — the item's own slug.
    pub item_slug: String,
}

/// Rewrite table service.
///
/// Cheap to clone; all clones share the same table.
#[derive(Clone, Default)]
pub struct RewriteService {
    rules: Arc<RwLock<Vec<RewriteRule>>>,
}

impl RewriteService {
    /// Create a service with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the table from the currently registered content types.
    ///
    /// Emits one rule per public type. The registry iteration order is
    /// arbitrary, so rules are sorted by slug to keep the table stable.
    pub fn rebuild(&self, registry: &ContentTypeRegistry) {
        let mut rules: Vec<RewriteRule> = registry
            .list()
            .into_iter()
            .filter(|def| def.public)
            .map(|def| RewriteRule {
                slug: def.slug,
                item_type: def.machine_name,
            })
            .collect();
        rules.sort_by(|a, b| a.slug.cmp(&b.slug));

        info!(count = rules.len(), "rewrite table rebuilt");
        *self.rules.write() = rules;
    }

    /// Resolve a request path like `/{type_slug}/{item_slug}` to its
    /// owning content type.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let mut segments = path.trim_matches('/').splitn(2, '/');
        let slug = segments.next()?;
        let item_slug = segments.next().unwrap_or_default();

        self.rules
            .read()
            .iter()
            .find(|rule| rule.slug == slug)
            .map(|rule| RouteMatch {
                item_type: rule.item_type.clone(),
                item_slug: item_slug.to_string(),
            })
    }

    /// Snapshot of the current rules.
    pub fn rules(&self) -> Vec<RewriteRule> {
        self.rules.read().clone()
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}
