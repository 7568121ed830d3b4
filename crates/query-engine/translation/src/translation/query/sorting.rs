//! Handle sort specification translation.

use query_engine_aql::aql;

use crate::translation::error::{json_type_name, Error};

/// Convert the sort specification from a QueryRequest to a SORT clause.
/// Input order fixes tie-break precedence. `-1` in number or string
/// form means descending; anything else means ascending.
pub fn translate_sort(
    variable: &aql::ast::DocumentVariable,
    sort: &serde_json::Value,
) -> Result<aql::ast::Sort, Error> {
    let entries = sort
        .as_object()
        .ok_or(Error::InvalidSortSpecification(json_type_name(sort)))?;

    let elements = entries
        .iter()
        .map(|(path, direction)| aql::ast::SortElement {
            target: aql::helpers::field_access(variable, path),
            direction: parse_direction(direction),
        })
        .collect();

    Ok(aql::ast::Sort::Fields(elements))
}

fn parse_direction(direction: &serde_json::Value) -> aql::ast::SortDirection {
    let descending = match direction {
        serde_json::Value::Number(num) => {
            num.as_i64() == Some(-1) || num.as_f64() == Some(-1.0)
        }
        serde_json::Value::String(text) => {
            text.trim().parse::<f64>().is_ok_and(|parsed| parsed == -1.0)
        }
        _ => false,
    };
    if descending {
        aql::ast::SortDirection::Desc
    } else {
        aql::ast::SortDirection::Asc
    }
}
