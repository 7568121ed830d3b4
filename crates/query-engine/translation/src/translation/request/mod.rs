//! The request IR: one incoming query, already deserialized into
//! primitive values by the upstream caller.

pub mod filter;

use serde::{Deserialize, Serialize};

use super::error::{json_type_name, Error};

/// One declarative client query against a collection. Nothing in here
/// is trusted: filter keys, select paths and sort keys are sanitized
/// during translation, and every value travels through the bind table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub collection: String,
    /// The nested filter object. May still contain reserved `$`-keys;
    /// the filter parser skips them.
    #[serde(default)]
    pub filter: serde_json::Map<String, serde_json::Value>,
    /// Dotted paths to project, in order. Empty or absent returns the
    /// whole document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,
    /// Mapping of path to direction. Validated during translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default)]
    pub skip: u64,
    /// A free-text search term, string or number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<serde_json::Value>,
}

impl QueryRequest {
    /// An empty request against a collection.
    pub fn new(collection: &str) -> QueryRequest {
        QueryRequest {
            collection: collection.to_string(),
            filter: serde_json::Map::new(),
            select: None,
            sort: None,
            limit: None,
            skip: 0,
            search: None,
        }
    }

    /// Split a combined query object, where pagination and search
    /// controls arrive mixed into the filter map (`$limit`, `$skip`,
    /// `$sort`, `$select`, `$search`), into a `QueryRequest`. The full
    /// map is kept as the filter; reserved keys are skipped again by
    /// the filter parser.
    pub fn from_query_object(
        collection: &str,
        query: &serde_json::Value,
    ) -> Result<QueryRequest, Error> {
        let mut request = QueryRequest::new(collection);

        let Some(entries) = query.as_object() else {
            return Ok(request);
        };
        request.filter = entries.clone();

        for (key, value) in entries {
            match key.as_str() {
                "$limit" => request.limit = Some(parse_pagination_value(value, Error::InvalidLimit)?),
                "$skip" => request.skip = parse_pagination_value(value, Error::InvalidSkip)?,
                "$sort" => request.sort = Some(value.clone()),
                "$search" => request.search = Some(value.clone()),
                "$select" => {
                    let fields = value
                        .as_array()
                        .map(|items| {
                            items
                                .iter()
                                .filter_map(serde_json::Value::as_str)
                                .map(str::to_string)
                                .collect()
                        })
                        .unwrap_or_default();
                    request.select = Some(fields);
                }
                _ => {}
            }
        }

        Ok(request)
    }
}

/// Read a `$limit`/`$skip` value: a non-negative integer, possibly
/// arriving as a numeric string.
fn parse_pagination_value(
    value: &serde_json::Value,
    mk_error: fn(String) -> Error,
) -> Result<u64, Error> {
    match value {
        serde_json::Value::Number(num) => num.as_u64().ok_or_else(|| mk_error(num.to_string())),
        serde_json::Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| mk_error(text.clone())),
        other => Err(mk_error(json_type_name(other).to_string())),
    }
}
