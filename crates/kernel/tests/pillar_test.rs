#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Pillar page resolution and content type generation tests.

mod common;

use common::build_state;
use pilastro_kernel::content::{Feature, Taxonomy};
use pilastro_kernel::models::{ItemId, ItemStatus};
use pilastro_test_utils::test_item;

#[tokio::test]
async fn resolve_preserves_order_and_duplicates() {
    let (state, items, _) = build_state("7,3,7");
    items.insert(test_item(3, "Three", "three"));
    items.insert(test_item(7, "Seven", "seven"));

    let pages = state.pillar().resolve_pillar_pages().await;
    let ids: Vec<ItemId> = pages.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![7, 3, 7]);
}

#[tokio::test]
async fn resolve_drops_stale_ids_silently() {
    let (state, items, _) = build_state("1,2,3");
    items.insert(test_item(2, "Two", "two"));

    let pages = state.pillar().resolve_pillar_pages().await;
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].id, 2);
}

#[tokio::test]
async fn resolve_is_idempotent_for_unchanged_state() {
    let (state, items, _) = build_state("5,9");
    items.insert(test_item(5, "Five", "five"));
    items.insert(test_item(9, "Nine", "nine"));

    let first = state.pillar().resolve_pillar_pages().await;
    let second = state.pillar().resolve_pillar_pages().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_and_unset_configuration_resolve_to_nothing() {
    let (state, _, _) = build_state("");
    assert!(state.pillar().resolve_pillar_pages().await.is_empty());

    // Unset variable: a store with no configuration at all.
    let variables = std::sync::Arc::new(pilastro_test_utils::MemoryVariableStore::new());
    let items = std::sync::Arc::new(pilastro_test_utils::MemoryItemStore::new());
    let state = pilastro_kernel::AppState::with_stores(variables, items);
    assert!(state.pillar().resolve_pillar_pages().await.is_empty());
    state.init().await;
    assert_eq!(state.types().len(), 1); // just the built-in post type
}

#[tokio::test]
async fn init_derives_definitions_from_source_items() {
    let (state, items, _) = build_state("42");
    items.insert(test_item(42, "Rust Guide", "rust-guide"));

    state.init().await;

    let def = state.types().get("pillar-page-42").unwrap();
    assert_eq!(def.label, "Rust Guide");
    assert_eq!(def.slug, "rust-guide");
    assert!(def.public);
    assert!(!def.has_archive);
    assert!(def.show_in_rest);
    assert_eq!(def.supports, Feature::ALL.to_vec());
    assert_eq!(def.taxonomies, vec![Taxonomy::Category, Taxonomy::Tag]);
}

#[tokio::test]
async fn init_skips_missing_items() {
    let (state, items, _) = build_state("5,99");
    items.insert(test_item(5, "Five", "five"));

    state.init().await;

    assert!(state.types().exists("pillar-page-5"));
    assert!(!state.types().exists("pillar-page-99"));
}

#[tokio::test]
async fn unpublished_items_still_count_as_pillar_pages() {
    let (state, items, _) = build_state("6");
    let mut draft = test_item(6, "Draft Hub", "draft-hub");
    draft.status = ItemStatus::Unpublished;
    items.insert(draft);

    state.init().await;
    assert!(state.types().exists("pillar-page-6"));
}

#[tokio::test]
async fn oversized_id_does_not_abort_the_batch() {
    // "pillar-page-" plus nine digits exceeds the 20-character machine
    // name limit; the neighbor must still be registered.
    let (state, items, _) = build_state("123456789,5");
    items.insert(test_item(123_456_789, "Too Big", "too-big"));
    items.insert(test_item(5, "Five", "five"));

    state.init().await;

    assert!(state.types().exists("pillar-page-5"));
    assert!(!state.types().exists("pillar-page-123456789"));
}

#[tokio::test]
async fn reregistration_overwrites_the_definition() {
    let (state, items, _) = build_state("42");
    items.insert(test_item(42, "Old Title", "old-slug"));
    state.init().await;
    assert_eq!(state.types().get("pillar-page-42").unwrap().label, "Old Title");

    items.insert(test_item(42, "New Title", "new-slug"));
    state.init().await;

    let def = state.types().get("pillar-page-42").unwrap();
    assert_eq!(def.label, "New Title");
    assert_eq!(def.slug, "new-slug");
}

#[tokio::test]
async fn duplicate_ids_register_a_single_type() {
    let (state, items, _) = build_state("7,7,7");
    items.insert(test_item(7, "Seven", "seven"));

    state.init().await;

    assert!(state.types().exists("pillar-page-7"));
    assert_eq!(state.types().len(), 2); // built-in post + one pillar type
}

#[tokio::test]
async fn store_failure_degrades_to_fewer_pages() {
    let (state, items, _) = build_state("5,6");
    items.insert(test_item(5, "Five", "five"));
    items.insert(test_item(6, "Six", "six"));
    items.break_id(6);

    let pages = state.pillar().resolve_pillar_pages().await;
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].id, 5);

    state.init().await;
    assert!(state.types().exists("pillar-page-5"));
    assert!(!state.types().exists("pillar-page-6"));
}

#[tokio::test]
async fn removing_an_id_stops_reregistration_but_deletes_nothing() {
    let (state, items, variables) = build_state("8");
    items.insert(test_item(8, "Eight", "eight"));
    state.init().await;
    assert!(state.types().exists("pillar-page-8"));

    // The admin clears the list; the next process start sees only the
    // built-in types, and the source item itself is untouched.
    use pilastro_kernel::content::ItemStore;
    use pilastro_kernel::pillar::POST_IDS_VAR;
    use pilastro_kernel::variables::VariableStore;
    variables.set(POST_IDS_VAR, "").await.unwrap();

    let fresh = pilastro_kernel::AppState::with_stores(variables.clone(), items.clone());
    fresh.init().await;
    assert!(!fresh.types().exists("pillar-page-8"));
    assert!(fresh.items().load(8).await.unwrap().is_some());
}
