//! Helpers for building aql::ast types in certain shapes and patterns.

use super::ast::*;

/// The cursor variable every statement binds over its collection.
pub fn document_variable() -> DocumentVariable {
    DocumentVariable("doc".to_string())
}

/// A fresh cursor variable for a nested per-element subquery. The index
/// keeps names unique within one statement.
pub fn element_variable(unique_index: u64) -> DocumentVariable {
    DocumentVariable(format!("elem_{unique_index}"))
}

/// Reference a cursor variable as an expression.
pub fn variable_reference(variable: &DocumentVariable) -> Expression {
    Expression::Variable(variable.clone())
}

/// Extend a reference expression by one sanitized path segment.
/// Extending an existing field access grows its path in place.
pub fn extend_field_access(reference: Expression, segment: FieldSegment) -> Expression {
    match reference {
        Expression::FieldAccess { base, mut segments } => {
            segments.push(segment);
            Expression::FieldAccess { base, segments }
        }
        other => Expression::FieldAccess {
            base: Box::new(other),
            segments: vec![segment],
        },
    }
}

/// Access a dotted path on a cursor variable, sanitizing each segment.
/// Empty segments (doubled or trailing dots) are dropped.
pub fn field_access(variable: &DocumentVariable, path: &str) -> Expression {
    let segments = path
        .split('.')
        .map(FieldSegment::new)
        .filter(|segment| !segment.as_str().is_empty())
        .collect();
    Expression::FieldAccess {
        base: Box::new(variable_reference(variable)),
        segments,
    }
}

/// Wrap a reference in `LENGTH(..)`, the virtual "length of" cursor used
/// by array-size comparisons.
pub fn length_of(reference: Expression) -> Expression {
    Expression::FunctionCall {
        function: Function::Length,
        args: vec![reference],
    }
}

/// Combine expressions with AND, flattening the trivial cases.
pub fn and(mut expressions: Vec<Expression>) -> Option<Expression> {
    match expressions.len() {
        0 => None,
        1 => expressions.pop(),
        _ => Some(Expression::And(expressions)),
    }
}

/// Combine expressions with OR, flattening the trivial cases.
pub fn or(mut expressions: Vec<Expression>) -> Option<Expression> {
    match expressions.len() {
        0 => None,
        1 => expressions.pop(),
        _ => Some(Expression::Or(expressions)),
    }
}

/// Build a statement over a collection with everything else empty.
pub fn simple_statement(collection: &str, variable: DocumentVariable) -> Statement {
    Statement {
        for_: For {
            variable: variable.clone(),
            source: IterationSource::Collection(CollectionName(collection.to_string())),
        },
        search: None,
        filter: None,
        sort: Sort::None,
        limit: Limit::None,
        return_: Return::Document(variable),
    }
}
