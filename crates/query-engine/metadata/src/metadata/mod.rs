//! Metadata information regarding the collections and tracked information.

pub mod search;

// re-export without modules
pub use search::*;

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub collections: CollectionsInfo,
    pub pagination: PaginationSettings,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            collections: CollectionsInfo::empty(),
            pagination: PaginationSettings::default(),
        }
    }
}

/// Mapping from collection name to its tracked information.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CollectionsInfo(pub BTreeMap<String, CollectionInfo>);

impl CollectionsInfo {
    pub fn empty() -> Self {
        CollectionsInfo(BTreeMap::new())
    }

    pub fn lookup(&self, collection: &str) -> Option<&CollectionInfo> {
        let CollectionsInfo(collections) = self;
        collections.get(collection)
    }
}

/// Information about one collection.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct CollectionInfo {
    /// The document key field, force-included in every projection.
    #[serde(default = "default_key_field")]
    pub key_field: String,
    /// Search configuration, if full-text search is enabled for this
    /// collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}

fn default_key_field() -> String {
    "_key".to_string()
}

impl Default for CollectionInfo {
    fn default() -> Self {
        CollectionInfo {
            key_field: default_key_field(),
            search: None,
        }
    }
}

/// Limits applied to every paginated statement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaginationSettings {
    /// Hard ceiling on the number of rows a single statement may return.
    /// Requested limits above this are clamped down to it.
    pub max_limit: u64,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        PaginationSettings {
            max_limit: 1_000_000_000,
        }
    }
}
