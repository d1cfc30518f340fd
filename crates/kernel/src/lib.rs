//! Pilastro CMS kernel.
//!
//! Pilastro lets a site designate ordinary posts as pillar pages: every
//! configured post gets a generated content type so other content can be
//! filed under it, the generated types are merged into the site's primary
//! listing query, and the rewrite table is rebuilt whenever the set changes.
//!
//! Hosts drive three events:
//! - [`AppState::init`] on every request/process start — re-registers the
//!   generated content types from current configuration and item state.
//! - [`AppState::alter_listing`] before executing the primary listing query.
//! - [`AppState::activate`] once when the extension is enabled. Configuration
//!   changes go through [`pillar::PillarPages::save_config`], which re-runs
//!   activation itself.

pub mod config;
pub mod content;
pub mod db;
pub mod listing;
pub mod models;
pub mod pillar;
pub mod rewrite;
pub mod state;
pub mod tap;
pub mod variables;

pub use config::Config;
pub use state::AppState;
