//! Pillar page services.
//!
//! A pillar page is an ordinary post designated as a hub: a dedicated
//! content type is generated for it so other content can be filed under it.
//! The set of pillar pages is driven entirely by the persisted
//! [`PillarConfig`] — generated definitions are recomputed from it on every
//! init event and never cached between events, so the registry always
//! reflects the current configuration and item state. Removing an ID from
//! the configuration never deletes data; the type simply stops being
//! re-registered.

mod config;
mod key;

pub use config::{sanitize_post_ids, PillarConfig, POST_IDS_VAR};
pub use key::{PillarTypeKey, TypeKeyError, TYPE_KEY_PREFIX};

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::content::{
    ContentTypeDefinition, ContentTypeRegistry, Feature, ItemStore, Taxonomy,
};
use crate::listing::{ListingQuery, TypeFilter};
use crate::models::Item;
use crate::rewrite::RewriteService;
use crate::tap::ListingTap;
use crate::variables::VariableStore;

/// Pillar page service.
///
/// Cheap to clone; all clones share the same stores, registry, and rewrite
/// table.
#[derive(Clone)]
pub struct PillarPages {
    inner: Arc<PillarPagesInner>,
}

struct PillarPagesInner {
    variables: Arc<dyn VariableStore>,
    items: Arc<dyn ItemStore>,
    types: ContentTypeRegistry,
    rewriter: RewriteService,
}

impl PillarPages {
    /// Create the service against the given collaborators.
    pub fn new(
        variables: Arc<dyn VariableStore>,
        items: Arc<dyn ItemStore>,
        types: ContentTypeRegistry,
        rewriter: RewriteService,
    ) -> Self {
        Self {
            inner: Arc::new(PillarPagesInner {
                variables,
                items,
                types,
                rewriter,
            }),
        }
    }

    /// Resolve the configured pillar pages to live item records.
    ///
    /// IDs come back in configuration order, duplicates included. Stale IDs
    /// with no matching item are dropped without error, and store failures
    /// degrade to skips — a broken backend yields fewer pillar pages, never
    /// a failed request. Each call re-reads the configuration; nothing is
    /// cached between calls.
    pub async fn resolve_pillar_pages(&self) -> Vec<Item> {
        let config = match PillarConfig::load(self.inner.variables.as_ref()).await {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "failed to load pillar configuration");
                return Vec::new();
            }
        };

        let mut pages = Vec::new();
        for id in config.ids() {
            match self.inner.items.status(id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    debug!(id, "skipping pillar ID with no matching item");
                    continue;
                }
                Err(e) => {
                    warn!(id, error = %e, "failed to check item status");
                    continue;
                }
            }

            match self.inner.items.load(id).await {
                Ok(Some(item)) => pages.push(item),
                Ok(None) => debug!(id, "item vanished between status check and load"),
                Err(e) => warn!(id, error = %e, "failed to load item"),
            }
        }

        pages
    }

    /// Derive and register one content type per resolved pillar page.
    ///
    /// Registrations are independent: a key that cannot be built or a
    /// definition the registry rejects is logged and skipped without
    /// aborting the rest of the batch. Re-registering the same key
    /// overwrites the previous definition.
    pub async fn register_content_types(&self) {
        for page in self.resolve_pillar_pages().await {
            let key = match PillarTypeKey::new(page.id) {
                Ok(key) => key,
                Err(e) => {
                    warn!(id = page.id, error = %e, "skipping pillar page");
                    continue;
                }
            };

            if let Err(e) = self.inner.types.register(definition_for(&key, &page)) {
                warn!(type_name = %key, error = %e, "failed to register content type");
            }
        }
    }

    /// Activation event: register the generated types, then rebuild the
    /// rewrite table.
    ///
    /// The rebuild must come second so routes observe the freshly
    /// registered slugs; the other way around, generated pages 404 until
    /// the next rebuild.
    pub async fn activate(&self) {
        self.register_content_types().await;
        self.inner.rewriter.rebuild(&self.inner.types);
    }

    /// Sanitize and persist a new ID list, then re-run activation.
    ///
    /// Activation here makes the new set live immediately: the admin never
    /// has to trigger a separate permalink flush after editing the list.
    pub async fn save_config(&self, raw_post_ids: &str) -> Result<()> {
        PillarConfig::new(raw_post_ids)
            .save(self.inner.variables.as_ref())
            .await?;
        self.activate().await;
        Ok(())
    }
}

#[async_trait]
impl ListingTap for PillarPages {
    /// Merge the generated type names into the site's primary home listing.
    ///
    /// Every other query is left untouched: admin screens, search, feeds,
    /// and secondary queries all fail the guard. The pillar keys are
    /// appended after the query's existing filter entries, in configuration
    /// order, without deduplication.
    async fn alter_listing(&self, query: &mut ListingQuery) {
        if !(query.is_home() && query.is_main()) {
            return;
        }

        let mut types = query.effective_types();
        for page in self.resolve_pillar_pages().await {
            match PillarTypeKey::new(page.id) {
                Ok(key) => types.push(key.as_str().to_string()),
                Err(e) => warn!(id = page.id, error = %e, "skipping pillar page"),
            }
        }
        query.set_item_types(TypeFilter::Many(types));
    }
}

/// Derive the generated content type for a pillar page.
///
/// Label and slug come from the source item; the rest mirrors an ordinary
/// post, minus the archive listing.
fn definition_for(key: &PillarTypeKey, page: &Item) -> ContentTypeDefinition {
    ContentTypeDefinition {
        machine_name: key.as_str().to_string(),
        label: page.title.clone(),
        slug: page.slug.clone(),
        public: true,
        has_archive: false,
        supports: Feature::ALL.to_vec(),
        taxonomies: vec![Taxonomy::Category, Taxonomy::Tag],
        show_in_rest: true,
    }
}
