//! State for the translation process.

use query_engine_aql::aql;
use query_engine_metadata::metadata;

/// Static information from the metadata for one translation: the
/// immutable service configuration and the collection under query.
/// Shared by reference; translation never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct Env<'a> {
    metadata: &'a metadata::Metadata,
    collection: &'a str,
}

impl<'a> Env<'a> {
    pub fn new(metadata: &'a metadata::Metadata, collection: &'a str) -> Env<'a> {
        Env {
            metadata,
            collection,
        }
    }

    pub fn collection(&self) -> &'a str {
        self.collection
    }

    pub fn collection_info(&self) -> Option<&'a metadata::CollectionInfo> {
        self.metadata.collections.lookup(self.collection)
    }

    /// The document key field of the collection, `_key` when the
    /// collection is not tracked in the metadata.
    pub fn key_field(&self) -> &'a str {
        self.collection_info()
            .map_or("_key", |info| info.key_field.as_str())
    }

    pub fn search_config(&self) -> Option<&'a metadata::SearchConfig> {
        self.collection_info()
            .and_then(|info| info.search.as_ref())
    }

    pub fn max_limit(&self) -> u64 {
        self.metadata.pagination.max_limit
    }
}

/// Mutable state we can reference throughout the translation. Used to
/// mint unique per-element cursor variables for nested subqueries.
#[derive(Debug, Default)]
pub struct State {
    element_index: u64,
}

impl State {
    pub fn new() -> State {
        State { element_index: 0 }
    }

    pub fn make_element_variable(&mut self) -> aql::ast::DocumentVariable {
        let index = self.element_index;
        self.element_index += 1;
        aql::helpers::element_variable(index)
    }
}
