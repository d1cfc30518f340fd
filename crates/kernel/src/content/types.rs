//! Content type definitions.

use serde::{Deserialize, Serialize};

/// Editing features a content type supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Title,
    Editor,
    Author,
    Thumbnail,
    Excerpt,
    Trackbacks,
    CustomFields,
    Revisions,
    PostFormats,
    Comments,
}

impl Feature {
    /// Every feature, in the order the editor surfaces them.
    pub const ALL: [Feature; 10] = [
        Feature::Title,
        Feature::Editor,
        Feature::Author,
        Feature::Thumbnail,
        Feature::Excerpt,
        Feature::Trackbacks,
        Feature::CustomFields,
        Feature::Revisions,
        Feature::PostFormats,
        Feature::Comments,
    ];
}

/// Taxonomies items of a content type can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    Category,
    Tag,
}

/// A content type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    /// Machine name (e.g. "post", "pillar-page-42").
    pub machine_name: String,

    /// Human-readable label shown in listings and the admin UI.
    pub label: String,

    /// URL slug for routes to items of this type.
    pub slug: String,

    /// Whether items of this type are publicly visible.
    pub public: bool,

    /// Whether the type gets its own archive listing.
    pub has_archive: bool,

    /// Supported editing features.
    pub supports: Vec<Feature>,

    /// Taxonomies items of this type participate in.
    pub taxonomies: Vec<Taxonomy>,

    /// Whether the type is exposed through the REST API.
    pub show_in_rest: bool,
}

impl ContentTypeDefinition {
    /// The built-in `post` type every site starts with.
    pub fn builtin_post() -> Self {
        Self {
            machine_name: "post".to_string(),
            label: "Post".to_string(),
            slug: "post".to_string(),
            public: true,
            has_archive: true,
            supports: Feature::ALL.to_vec(),
            taxonomies: vec![Taxonomy::Category, Taxonomy::Tag],
            show_in_rest: true,
        }
    }
}
