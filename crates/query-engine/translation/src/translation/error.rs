//! Errors for query translation.

use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Expected the sort specification to be an object, got: {0}.")]
    InvalidSortSpecification(&'static str),
    #[error("Invalid search term: expected a string or a number, got: {0}.")]
    InvalidSearchTerm(&'static str),
    #[error("No search fields are configured for collection '{0}'.")]
    SearchNotConfigured(String),
    #[error("Cannot search by type {term_type} on collection '{collection}'.")]
    SearchTypeNotSupported {
        term_type: &'static str,
        collection: String,
    },
    #[error("Expected '$limit' to be a non-negative integer, got: {0}.")]
    InvalidLimit(String),
    #[error("Expected '$skip' to be a non-negative integer, got: {0}.")]
    InvalidSkip(String),
}

/// The JSON type of a value, for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
