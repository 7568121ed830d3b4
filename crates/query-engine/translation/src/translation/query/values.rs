//! Handle the translation of literal values.

use query_engine_aql::aql;

/// Convert a JSON value into an AQL bind value. Objects pass through
/// as raw JSON; they still only ever reach the bind table.
pub fn translate_json_value(value: &serde_json::Value) -> aql::ast::Value {
    match value {
        serde_json::Value::Null => aql::ast::Value::Null,
        serde_json::Value::Bool(b) => aql::ast::Value::Bool(*b),
        serde_json::Value::Number(num) => match num.as_i64() {
            Some(i) => aql::ast::Value::Int(i),
            None => match num.as_f64() {
                Some(f) => aql::ast::Value::Float(f),
                None => aql::ast::Value::Json(value.clone()),
            },
        },
        serde_json::Value::String(s) => aql::ast::Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            aql::ast::Value::Array(items.iter().map(translate_json_value).collect())
        }
        serde_json::Value::Object(_) => aql::ast::Value::Json(value.clone()),
    }
}
