//! Handle filtering clause translation.

use query_engine_aql::aql;

use super::values;
use crate::translation::helpers::State;
use crate::translation::request::filter::{ComparisonOperator, FilterExpr};

/// Translate a parsed filter against the reference it constrains.
///
/// Comparisons keep the operand order of the reference semantics: range
/// operators read "value OP field" with the operator mirrored, and the
/// membership quantifiers test the supplied list against the field.
pub fn translate_expression(
    state: &mut State,
    reference: &aql::ast::Expression,
    filter: &FilterExpr,
) -> aql::ast::Expression {
    match filter {
        FilterExpr::Equals(value) => aql::ast::Expression::BinaryOperation {
            left: Box::new(reference.clone()),
            operator: aql::ast::BinaryOperator::Equals,
            right: Box::new(value_expression(value)),
        },
        FilterExpr::Comparison(operator, value) => {
            translate_comparison(reference, *operator, value)
        }
        FilterExpr::Field(segment, inner) => {
            let extended = aql::helpers::extend_field_access(
                reference.clone(),
                aql::ast::FieldSegment::new(segment),
            );
            translate_expression(state, &extended, inner)
        }
        FilterExpr::And(elements) => aql::ast::Expression::And(
            elements
                .iter()
                .map(|element| translate_expression(state, reference, element))
                .collect(),
        ),
        FilterExpr::Or(elements) => aql::ast::Expression::Or(
            elements
                .iter()
                .map(|element| translate_expression(state, reference, element))
                .collect(),
        ),
        FilterExpr::Size(inner) => {
            // recurse against the virtual "length of" reference
            let length = aql::helpers::length_of(reference.clone());
            translate_expression(state, &length, inner)
        }
        FilterExpr::ElemMatch(inner) => {
            let element = state.make_element_variable();
            let element_ref = aql::helpers::variable_reference(&element);
            let condition = translate_expression(state, &element_ref, inner);
            aql::ast::Expression::BinaryOperation {
                left: Box::new(aql::ast::Expression::FilteredCount {
                    variable: element,
                    source: Box::new(reference.clone()),
                    condition: Box::new(condition),
                }),
                operator: aql::ast::BinaryOperator::GreaterThan,
                right: Box::new(aql::ast::Expression::Value(aql::ast::Value::Int(0))),
            }
        }
    }
}

fn translate_comparison(
    reference: &aql::ast::Expression,
    operator: ComparisonOperator,
    value: &serde_json::Value,
) -> aql::ast::Expression {
    let value_expr = value_expression(value);
    match operator {
        ComparisonOperator::In => aql::ast::Expression::ArrayComparison {
            left: Box::new(value_expr),
            operator: aql::ast::ArrayComparisonOperator::AnyEquals,
            right: Box::new(reference.clone()),
        },
        ComparisonOperator::NotIn => aql::ast::Expression::ArrayComparison {
            left: Box::new(value_expr),
            operator: aql::ast::ArrayComparisonOperator::NoneEquals,
            right: Box::new(reference.clone()),
        },
        ComparisonOperator::NotEquals => {
            value_comparison(value_expr, aql::ast::BinaryOperator::NotEquals, reference)
        }
        ComparisonOperator::LessThan => {
            value_comparison(value_expr, aql::ast::BinaryOperator::GreaterThan, reference)
        }
        ComparisonOperator::LessThanOrEqualTo => value_comparison(
            value_expr,
            aql::ast::BinaryOperator::GreaterThanOrEqualTo,
            reference,
        ),
        ComparisonOperator::GreaterThan => {
            value_comparison(value_expr, aql::ast::BinaryOperator::LessThan, reference)
        }
        ComparisonOperator::GreaterThanOrEqualTo => value_comparison(
            value_expr,
            aql::ast::BinaryOperator::LessThanOrEqualTo,
            reference,
        ),
    }
}

fn value_comparison(
    value_expr: aql::ast::Expression,
    operator: aql::ast::BinaryOperator,
    reference: &aql::ast::Expression,
) -> aql::ast::Expression {
    aql::ast::Expression::BinaryOperation {
        left: Box::new(value_expr),
        operator,
        right: Box::new(reference.clone()),
    }
}

fn value_expression(value: &serde_json::Value) -> aql::ast::Expression {
    aql::ast::Expression::Value(values::translate_json_value(value))
}
