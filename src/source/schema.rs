//! Wire types for the NASA image-search response.
//!
//! Only the fields the feed consumes are declared; serde ignores the rest
//! (`href`, `version`, `metadata`, `keywords`, `nasa_id`, …).  These values
//! exist only while a response is being decoded; the rest of the application
//! works with [`DisplayRecord`](super::DisplayRecord).

use serde::{Deserialize, Serialize};

/// Top-level response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub collection: Collection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub items: Vec<Item>,
}

/// One search hit.
///
/// The API returns `data` and `links` as arrays but only ever fills the first
/// slot; later entries are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub data: Vec<ItemData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ItemLink>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// NASA center that produced the asset; shown as the attribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLink {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}
