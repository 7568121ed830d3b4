//! Handle search term translation.

use query_engine_aql::aql;
use query_engine_metadata::metadata;

use crate::translation::error::{json_type_name, Error};
use crate::translation::helpers::Env;

/// A translated search term: the clause itself, the relevance ranking
/// that overrides any explicit sort, and the view the statement must
/// iterate instead of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTranslation {
    pub clause: aql::ast::SearchClause,
    pub ranking: aql::ast::Sort,
    pub view: aql::ast::ViewName,
}

/// How a term matches, decided from its raw shape. A quoted string is
/// an exact phrase, an unquoted string matches approximately, a number
/// compares by equality.
#[derive(Debug, Clone, PartialEq)]
enum TermKind {
    Numeric(aql::ast::Value),
    Exact(String),
    Fuzzy(String),
}

impl TermKind {
    fn type_name(&self) -> &'static str {
        match self {
            TermKind::Numeric(_) => "number",
            TermKind::Exact(_) | TermKind::Fuzzy(_) => "string",
        }
    }
}

/// Convert a search term to a ranked clause over the collection's
/// configured search fields.
pub fn translate_search(
    env: &Env,
    variable: &aql::ast::DocumentVariable,
    term: &serde_json::Value,
) -> Result<SearchTranslation, Error> {
    let config = env
        .search_config()
        .filter(|config| !config.fields.is_empty())
        .ok_or_else(|| Error::SearchNotConfigured(env.collection().to_string()))?;

    let kind = detect_term_kind(term)?;

    let clauses: Vec<aql::ast::Expression> = config
        .fields
        .iter()
        .filter_map(|field| translate_field_clause(variable, config, field, &kind))
        .collect();

    let Some(expression) = aql::helpers::or(clauses) else {
        return Err(Error::SearchTypeNotSupported {
            term_type: kind.type_name(),
            collection: env.collection().to_string(),
        });
    };

    let placement = match kind {
        // exact phrases filter; fuzzy and numeric terms go through the
        // view's SEARCH clause
        TermKind::Exact(_) => aql::ast::SearchPlacement::Filter,
        TermKind::Numeric(_) | TermKind::Fuzzy(_) => aql::ast::SearchPlacement::Search,
    };

    Ok(SearchTranslation {
        clause: aql::ast::SearchClause {
            placement,
            expression,
        },
        ranking: aql::ast::Sort::Relevance(variable.clone()),
        view: aql::ast::ViewName(config.view.clone()),
    })
}

/// The clause for one configured field, or `None` when the field's
/// declared type does not match the term's.
fn translate_field_clause(
    variable: &aql::ast::DocumentVariable,
    config: &metadata::SearchConfig,
    field: &metadata::SearchFieldInfo,
    kind: &TermKind,
) -> Option<aql::ast::Expression> {
    let target = aql::helpers::field_access(variable, &field.name);
    match kind {
        TermKind::Numeric(number) => match field.field_type {
            metadata::SearchFieldType::Number => {
                Some(equality(target, number.clone()))
            }
            metadata::SearchFieldType::String => None,
        },
        TermKind::Exact(text) => match field.field_type {
            metadata::SearchFieldType::String if field.fuzzy => {
                Some(contains_lowered(target, text))
            }
            metadata::SearchFieldType::String => {
                Some(equality(target, aql::ast::Value::String(text.clone())))
            }
            metadata::SearchFieldType::Number => None,
        },
        TermKind::Fuzzy(text) => match field.field_type {
            metadata::SearchFieldType::String if field.fuzzy => Some(ngram_match(
                target,
                text,
                config.similarity_threshold,
                &field.analyzer,
            )),
            metadata::SearchFieldType::String => {
                Some(equality(target, aql::ast::Value::String(text.clone())))
            }
            metadata::SearchFieldType::Number => None,
        },
    }
}

/// `target == @term`
fn equality(target: aql::ast::Expression, value: aql::ast::Value) -> aql::ast::Expression {
    aql::ast::Expression::BinaryOperation {
        left: Box::new(target),
        operator: aql::ast::BinaryOperator::Equals,
        right: Box::new(aql::ast::Expression::Value(value)),
    }
}

/// `CONTAINS(LOWER(target), LOWER(@term))`: case-insensitive phrase
/// containment for exact terms.
fn contains_lowered(target: aql::ast::Expression, text: &str) -> aql::ast::Expression {
    aql::ast::Expression::FunctionCall {
        function: aql::ast::Function::Contains,
        args: vec![
            lower(target),
            lower(aql::ast::Expression::Value(aql::ast::Value::String(
                text.to_string(),
            ))),
        ],
    }
}

fn lower(argument: aql::ast::Expression) -> aql::ast::Expression {
    aql::ast::Expression::FunctionCall {
        function: aql::ast::Function::Lower,
        args: vec![argument],
    }
}

/// `ANALYZER(NGRAM_MATCH(target, @term, floor, "analyzer"), "analyzer")`,
/// the approximate match under the view's n-gram analyzer.
fn ngram_match(
    target: aql::ast::Expression,
    text: &str,
    similarity_threshold: f64,
    analyzer: &str,
) -> aql::ast::Expression {
    let analyzer = aql::ast::AnalyzerName::new(analyzer);
    aql::ast::Expression::FunctionCall {
        function: aql::ast::Function::Analyzer,
        args: vec![
            aql::ast::Expression::FunctionCall {
                function: aql::ast::Function::NgramMatch,
                args: vec![
                    target,
                    aql::ast::Expression::Value(aql::ast::Value::String(text.to_string())),
                    aql::ast::Expression::FloatLiteral(similarity_threshold),
                    aql::ast::Expression::AnalyzerName(analyzer.clone()),
                ],
            },
            aql::ast::Expression::AnalyzerName(analyzer),
        ],
    }
}

/// Decide how the raw term matches. Only strings and numbers are legal
/// search input.
fn detect_term_kind(term: &serde_json::Value) -> Result<TermKind, Error> {
    match term {
        serde_json::Value::Number(num) => {
            let value = match num.as_i64() {
                Some(i) => aql::ast::Value::Int(i),
                None => aql::ast::Value::Float(num.as_f64().unwrap_or_default()),
            };
            Ok(TermKind::Numeric(value))
        }
        serde_json::Value::String(text) => Ok(match strip_quote_pair(text) {
            Some(stripped) => TermKind::Exact(stripped.to_string()),
            None => TermKind::Fuzzy(text.clone()),
        }),
        other => Err(Error::InvalidSearchTerm(json_type_name(other))),
    }
}

/// A term wrapped in one matching pair of quote characters is an exact
/// phrase; return it without the quotes.
fn strip_quote_pair(text: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return Some(&text[1..text.len() - 1]);
        }
    }
    None
}
