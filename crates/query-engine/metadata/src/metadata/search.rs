//! Search view configuration for a collection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The search configuration of one collection: which view to iterate
/// and which fields participate in term matching. Supplied once at
/// service-configuration time and immutable afterwards.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchConfig {
    /// The search view bound in place of the collection when a search
    /// term is present.
    pub view: String,
    /// Similarity floor for fuzzy (n-gram) matching.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// The fields a search term is matched against.
    pub fields: Vec<SearchFieldInfo>,
}

fn default_similarity_threshold() -> f64 {
    0.7
}

/// One searchable field.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchFieldInfo {
    /// Dotted path of the field within the document.
    pub name: String,
    /// The view analyzer tokenizing this field.
    #[serde(default = "default_analyzer")]
    pub analyzer: String,
    /// Whether unquoted terms match this field approximately rather
    /// than by equality.
    #[serde(default)]
    pub fuzzy: bool,
    #[serde(rename = "type")]
    pub field_type: SearchFieldType,
}

fn default_analyzer() -> String {
    "identity".to_string()
}

/// The declared type of a searchable field. Terms only match fields of
/// their own type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchFieldType {
    String,
    Number,
}
