//! Parse the untyped filter object into a tagged filter AST.
//!
//! One recursive-descent pass turns the client's nested map into
//! `FilterExpr`, so the compiler proper never dispatches on raw string
//! keys.

use serde_json::Value;

/// Control keys consumed during request splitting. They never name
/// fields and are skipped wherever they appear in a filter object.
const RESERVED: [&str; 7] = [
    "$select",
    "$limit",
    "$skip",
    "$sort",
    "$search",
    "$resolve",
    "$calculate",
];

/// A parsed filter, relative to the reference it constrains (a field
/// path, or a per-element cursor inside `ElemMatch`).
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    /// A leaf value: equality against the current reference.
    Equals(Value),
    /// A recognized comparison key and its operand.
    Comparison(ComparisonOperator, Value),
    /// Descend into a property of the current reference. The segment is
    /// raw client input here; it is sanitized when compiled.
    Field(String, Box<FilterExpr>),
    /// Flat conjunction.
    And(Vec<FilterExpr>),
    /// Parenthesized disjunction.
    Or(Vec<FilterExpr>),
    /// Constrain the element count of the current reference.
    Size(Box<FilterExpr>),
    /// Existential test over the elements of the current reference.
    ElemMatch(Box<FilterExpr>),
}

/// A comparison operator keyed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    In,
    NotIn,
    NotEquals,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
}

/// Parse a whole filter map. `None` means no filtering.
pub fn parse_filter_object(filter: &serde_json::Map<String, Value>) -> Option<FilterExpr> {
    parse_object_entries(filter)
}

/// Parse one level of the filter grammar.
pub fn parse_filter(value: &Value) -> Option<FilterExpr> {
    match value {
        Value::Object(entries) => parse_object_entries(entries),
        // Any non-object leaf, arrays included, compares whole against
        // the current reference.
        leaf => Some(FilterExpr::Equals(leaf.clone())),
    }
}

fn parse_object_entries(entries: &serde_json::Map<String, Value>) -> Option<FilterExpr> {
    let mut conditions: Vec<FilterExpr> = vec![];
    for (key, value) in entries {
        match key.as_str() {
            "$in" => conditions.push(FilterExpr::Comparison(
                ComparisonOperator::In,
                value.clone(),
            )),
            "$nin" => conditions.push(FilterExpr::Comparison(
                ComparisonOperator::NotIn,
                value.clone(),
            )),
            "$ne" | "$not" => conditions.push(FilterExpr::Comparison(
                ComparisonOperator::NotEquals,
                value.clone(),
            )),
            "$lt" => conditions.push(FilterExpr::Comparison(
                ComparisonOperator::LessThan,
                value.clone(),
            )),
            "$lte" => conditions.push(FilterExpr::Comparison(
                ComparisonOperator::LessThanOrEqualTo,
                value.clone(),
            )),
            "$gt" => conditions.push(FilterExpr::Comparison(
                ComparisonOperator::GreaterThan,
                value.clone(),
            )),
            "$gte" => conditions.push(FilterExpr::Comparison(
                ComparisonOperator::GreaterThanOrEqualTo,
                value.clone(),
            )),
            "$or" => {
                let elements = parse_list(value);
                if !elements.is_empty() {
                    conditions.push(FilterExpr::Or(elements));
                }
            }
            "$and" => {
                let elements = parse_list(value);
                if !elements.is_empty() {
                    conditions.push(FilterExpr::And(elements));
                }
            }
            "$size" => {
                if let Some(inner) = parse_filter(value) {
                    conditions.push(FilterExpr::Size(Box::new(inner)));
                }
            }
            "$elemMatch" => {
                if let Some(inner) = parse_filter(value) {
                    conditions.push(FilterExpr::ElemMatch(Box::new(inner)));
                }
            }
            key if RESERVED.contains(&key) => {}
            // Every other key, recognizable or garbage, names a field.
            // It will be sanitized into a property path, so a crafted
            // key can only ever become a harmless comparison.
            _ => {
                if let Some(inner) = parse_filter(value) {
                    conditions.push(FilterExpr::Field(key.clone(), Box::new(inner)));
                }
            }
        }
    }

    match conditions.len() {
        0 => None,
        1 => conditions.pop(),
        _ => Some(FilterExpr::And(conditions)),
    }
}

/// The elements of `$and`/`$or`. A single object is accepted in place
/// of a one-element list.
fn parse_list(value: &Value) -> Vec<FilterExpr> {
    match value {
        Value::Array(items) => items.iter().filter_map(parse_filter).collect(),
        other => parse_filter(other).into_iter().collect(),
    }
}
