//! Tap extension points.
//!
//! Taps are extension points invoked in weight order (lower weight runs
//! first). The kernel currently dispatches one tap: altering a listing
//! query before the platform executes it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::listing::ListingQuery;

/// Extension point invoked before a listing query executes.
#[async_trait]
pub trait ListingTap: Send + Sync {
    /// Inspect and optionally mutate the query in place.
    async fn alter_listing(&self, query: &mut ListingQuery);
}

/// A registered tap handler with its dispatch weight.
#[derive(Clone)]
struct TapHandler {
    tap: Arc<dyn ListingTap>,
    weight: i32,
}

/// Registry of listing tap handlers, dispatched in weight order.
#[derive(Clone, Default)]
pub struct TapRegistry {
    handlers: Vec<TapHandler>,
}

impl TapRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Lower weight runs first; ties keep registration
    /// order (the sort is stable).
    pub fn register(&mut self, tap: Arc<dyn ListingTap>, weight: i32) {
        self.handlers.push(TapHandler { tap, weight });
        self.handlers.sort_by_key(|h| h.weight);
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Invoke every handler against the query, in weight order.
    pub async fn dispatch_listing(&self, query: &mut ListingQuery) {
        if self.handlers.is_empty() {
            debug!("no handlers registered for listing tap");
            return;
        }

        for handler in &self.handlers {
            handler.tap.alter_listing(query).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::listing::TypeFilter;

    /// Appends its marker to the query's type filter when invoked.
    struct MarkerTap {
        marker: String,
    }

    #[async_trait]
    impl ListingTap for MarkerTap {
        async fn alter_listing(&self, query: &mut ListingQuery) {
            let mut types = query.effective_types();
            types.push(self.marker.clone());
            query.set_item_types(TypeFilter::Many(types));
        }
    }

    #[tokio::test]
    async fn dispatch_runs_handlers_in_weight_order() {
        let mut registry = TapRegistry::new();
        registry.register(
            Arc::new(MarkerTap {
                marker: "late".to_string(),
            }),
            10,
        );
        registry.register(
            Arc::new(MarkerTap {
                marker: "early".to_string(),
            }),
            -10,
        );
        assert_eq!(registry.handler_count(), 2);

        let mut query = ListingQuery::home_main();
        registry.dispatch_listing(&mut query).await;

        assert_eq!(
            query.effective_types(),
            vec!["post".to_string(), "early".to_string(), "late".to_string()]
        );
    }

    #[tokio::test]
    async fn dispatch_with_no_handlers_leaves_query_alone() {
        let registry = TapRegistry::new();
        let mut query = ListingQuery::home_main();
        registry.dispatch_listing(&mut query).await;
        assert!(query.item_types().is_none());
    }
}
