//! Type definitions of a low-level AQL string representation.

use super::ast::FieldSegment;

/// A statement string under construction, together with the bind
/// variables accumulated so far. Values only ever enter `bind_vars`;
/// the text receives a `@valueN` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct AQL {
    pub aql: String,
    pub bind_vars: Vec<BindVar>,
    /// for internal use and tests only
    pub bind_index: u64,
}

impl Default for AQL {
    fn default() -> Self {
        Self::new()
    }
}

/// A single bind variable: the name as it appears in the bind table
/// (without the `@` sigil) and the value shipped out-of-band.
#[derive(Debug, Clone, PartialEq)]
pub struct BindVar {
    pub name: String,
    pub value: serde_json::Value,
}

impl AQL {
    pub fn new() -> AQL {
        AQL {
            aql: String::new(),
            bind_vars: vec![],
            bind_index: 0,
        }
    }

    /// Append known-safe statement syntax.
    pub fn append_syntax(&mut self, aql: &str) {
        self.aql.push_str(aql);
    }

    /// Append a sanitized field path segment as literal text.
    pub fn append_identifier(&mut self, segment: &FieldSegment) {
        self.aql.push_str(segment.as_str());
    }

    /// Append a value as a fresh `@valueN` placeholder and record it in
    /// the bind table.
    pub fn append_bind_var(&mut self, value: serde_json::Value) {
        let name = format!("value{}", self.bind_index);
        self.bind_index += 1;
        self.aql.push('@');
        self.aql.push_str(&name);
        self.bind_vars.push(BindVar { name, value });
    }

    /// Append the iteration target as a `@@collection` placeholder. The
    /// bind table key for a collection bind variable carries a single
    /// leading `@`.
    pub fn append_collection_bind(&mut self, name: &str) {
        self.aql.push_str("@@collection");
        self.bind_vars.push(BindVar {
            name: "@collection".to_string(),
            value: serde_json::Value::String(name.to_string()),
        });
    }
}
