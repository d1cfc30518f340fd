//! Listing query descriptors.
//!
//! A [`ListingQuery`] describes a content listing before the platform
//! executes it. Taps receive the descriptor mutably and may adjust the
//! content type filter; everything else about query execution stays with
//! the host.

use serde::{Deserialize, Serialize};

/// Content type a listing falls back to when no filter has been set.
pub const DEFAULT_LISTING_TYPE: &str = "post";

/// Content type filter on a listing query.
///
/// Hosts hand the filter over either as a bare type name or as an ordered
/// set, so both shapes are first-class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeFilter {
    /// A single type name.
    One(String),

    /// An ordered set of type names.
    Many(Vec<String>),
}

impl TypeFilter {
    /// Normalize to an ordered sequence, wrapping a bare single value.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(name) => vec![name],
            Self::Many(names) => names,
        }
    }
}

/// A listing query descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    home: bool,
    main: bool,
    item_types: Option<TypeFilter>,
}

impl ListingQuery {
    /// Create a query descriptor with no type filter set.
    pub fn new(home: bool, main: bool) -> Self {
        Self {
            home,
            main,
            item_types: None,
        }
    }

    /// The site's default listing, run as the request's primary query.
    pub fn home_main() -> Self {
        Self::new(true, true)
    }

    /// Whether this is the site's default/home listing.
    pub fn is_home(&self) -> bool {
        self.home
    }

    /// Whether this is the primary query for the request.
    pub fn is_main(&self) -> bool {
        self.main
    }

    /// The current content type filter, if one has been set.
    pub fn item_types(&self) -> Option<&TypeFilter> {
        self.item_types.as_ref()
    }

    /// Replace the content type filter.
    pub fn set_item_types(&mut self, filter: TypeFilter) {
        self.item_types = Some(filter);
    }

    /// The filter normalized to an ordered sequence.
    ///
    /// An unset filter defaults to the ordinary post type.
    pub fn effective_types(&self) -> Vec<String> {
        match &self.item_types {
            Some(filter) => filter.clone().into_vec(),
            None => vec![DEFAULT_LISTING_TYPE.to_string()],
        }
    }
}
