#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]
//! Common test utilities for integration tests.
//!
//! Tests run the real kernel services over the in-memory stores from
//! `pilastro-test-utils`.

use std::sync::{Arc, Once};

use pilastro_kernel::pillar::POST_IDS_VAR;
use pilastro_kernel::AppState;
use pilastro_test_utils::{MemoryItemStore, MemoryVariableStore};

static TRACING: Once = Once::new();

/// Initialize test logging once; honors RUST_LOG.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build an [`AppState`] over in-memory stores with the given raw ID list.
pub fn build_state(
    post_ids: &str,
) -> (AppState, Arc<MemoryItemStore>, Arc<MemoryVariableStore>) {
    init_tracing();

    let variables = Arc::new(MemoryVariableStore::with_variable(POST_IDS_VAR, post_ids));
    let items = Arc::new(MemoryItemStore::new());
    let state = AppState::with_stores(variables.clone(), items.clone());
    (state, items, variables)
}
