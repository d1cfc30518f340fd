//! Shared application state.

use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;

use crate::config::Config;
use crate::content::{ContentTypeRegistry, ItemStore, SqlItemStore};
use crate::db;
use crate::listing::ListingQuery;
use crate::pillar::PillarPages;
use crate::rewrite::RewriteService;
use crate::tap::TapRegistry;
use crate::variables::{SqlVariableStore, VariableStore};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Constructed once at process
/// start and handed to whichever component needs it — there is no ambient
/// global lookup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    variables: Arc<dyn VariableStore>,
    items: Arc<dyn ItemStore>,
    types: ContentTypeRegistry,
    rewriter: RewriteService,
    taps: TapRegistry,
    pillar: PillarPages,
}

impl AppState {
    /// Connect to Postgres and build the state with SQL-backed stores.
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = db::create_pool(config).await?;
        Ok(Self::from_pool(pool))
    }

    /// Build the state over an existing connection pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::with_stores(
            Arc::new(SqlVariableStore::new(pool.clone())),
            Arc::new(SqlItemStore::new(pool)),
        )
    }

    /// Build the state over caller-supplied stores.
    ///
    /// Integration tests use this with the in-memory stores from
    /// `pilastro-test-utils`.
    pub fn with_stores(
        variables: Arc<dyn VariableStore>,
        items: Arc<dyn ItemStore>,
    ) -> Self {
        let types = ContentTypeRegistry::with_builtin_types();
        let rewriter = RewriteService::new();
        let pillar = PillarPages::new(
            Arc::clone(&variables),
            Arc::clone(&items),
            types.clone(),
            rewriter.clone(),
        );

        let mut taps = TapRegistry::new();
        taps.register(Arc::new(pillar.clone()), 0);

        Self {
            inner: Arc::new(AppStateInner {
                variables,
                items,
                types,
                rewriter,
                taps,
                pillar,
            }),
        }
    }

    /// Init event, run on every request/process start.
    ///
    /// Re-registers the generated content types from current configuration
    /// and item state. Never touches the rewrite table — that is
    /// activation's job, and rebuilding per request would be far too
    /// expensive.
    pub async fn init(&self) {
        self.inner.pillar.register_content_types().await;
    }

    /// Run the registered listing taps against a query, in weight order.
    ///
    /// Hosts call this immediately before executing the query.
    pub async fn alter_listing(&self, query: &mut ListingQuery) {
        self.inner.taps.dispatch_listing(query).await;
    }

    /// Activation event, run once when the extension is enabled.
    pub async fn activate(&self) {
        self.inner.pillar.activate().await;
    }

    /// The key-value variable store.
    pub fn variables(&self) -> &Arc<dyn VariableStore> {
        &self.inner.variables
    }

    /// The content item store.
    pub fn items(&self) -> &Arc<dyn ItemStore> {
        &self.inner.items
    }

    /// The content type registry.
    pub fn types(&self) -> &ContentTypeRegistry {
        &self.inner.types
    }

    /// The rewrite table service.
    pub fn rewriter(&self) -> &RewriteService {
        &self.inner.rewriter
    }

    /// The pillar page service.
    pub fn pillar(&self) -> &PillarPages {
        &self.inner.pillar
    }
}
