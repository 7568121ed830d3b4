//! Shared fixtures: metadata for a test collection and a helper running
//! a request through translation to text plus bind variables.

use std::collections::BTreeMap;

use query_engine_metadata::metadata;
use query_engine_translation::translation;
use query_engine_translation::translation::request::QueryRequest;

/// Metadata for a 'person' collection with a configured search view:
/// a fuzzy display name, an exact-match email and a numeric person id.
pub fn person_metadata() -> metadata::Metadata {
    let mut collections = BTreeMap::new();
    collections.insert(
        "person".to_string(),
        metadata::CollectionInfo {
            key_field: "_key".to_string(),
            search: Some(metadata::SearchConfig {
                view: "person_view".to_string(),
                similarity_threshold: 0.7,
                fields: vec![
                    metadata::SearchFieldInfo {
                        name: "displayName".to_string(),
                        analyzer: "text_en".to_string(),
                        fuzzy: true,
                        field_type: metadata::SearchFieldType::String,
                    },
                    metadata::SearchFieldInfo {
                        name: "email".to_string(),
                        analyzer: "identity".to_string(),
                        fuzzy: false,
                        field_type: metadata::SearchFieldType::String,
                    },
                    metadata::SearchFieldInfo {
                        name: "personID".to_string(),
                        analyzer: "identity".to_string(),
                        fuzzy: false,
                        field_type: metadata::SearchFieldType::Number,
                    },
                ],
            }),
        },
    );
    metadata::Metadata {
        collections: metadata::CollectionsInfo(collections),
        pagination: metadata::PaginationSettings::default(),
    }
}

/// Metadata whose only searchable field is the numeric 'age'.
pub fn age_only_metadata() -> metadata::Metadata {
    let mut collections = BTreeMap::new();
    collections.insert(
        "person".to_string(),
        metadata::CollectionInfo {
            key_field: "_key".to_string(),
            search: Some(metadata::SearchConfig {
                view: "person_view".to_string(),
                similarity_threshold: 0.7,
                fields: vec![metadata::SearchFieldInfo {
                    name: "age".to_string(),
                    analyzer: "identity".to_string(),
                    fuzzy: false,
                    field_type: metadata::SearchFieldType::Number,
                }],
            }),
        },
    );
    metadata::Metadata {
        collections: metadata::CollectionsInfo(collections),
        pagination: metadata::PaginationSettings::default(),
    }
}

/// Translate a request and render it, returning the statement text and
/// the bind variables as name/value pairs.
pub fn translate(
    metadata: &metadata::Metadata,
    request: QueryRequest,
) -> Result<(String, Vec<(String, serde_json::Value)>), translation::error::Error> {
    let plan = translation::query::translate(metadata, request)?;
    let query = plan.query_aql();
    Ok((
        query.aql,
        query
            .bind_vars
            .into_iter()
            .map(|bind_var| (bind_var.name, bind_var.value))
            .collect(),
    ))
}

/// Build a request from the combined query-object form.
pub fn request(query: serde_json::Value) -> QueryRequest {
    QueryRequest::from_query_object("person", &query).expect("valid query object")
}
