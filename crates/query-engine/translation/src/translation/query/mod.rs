//! Translate an incoming `QueryRequest`.

pub mod filtering;
pub mod projection;
pub mod search;
pub mod sorting;
pub mod values;

use query_engine_aql::aql;
use query_engine_metadata::metadata;

use crate::translation::error::Error;
use crate::translation::helpers::{Env, State};
use crate::translation::request::{filter, QueryRequest};

/// Translate the incoming QueryRequest to an ExecutionPlan (AQL) to be
/// run against the database.
pub fn translate(
    metadata: &metadata::Metadata,
    query_request: QueryRequest,
) -> Result<aql::execution_plan::ExecutionPlan, Error> {
    let env = Env::new(metadata, &query_request.collection);
    let mut state = State::new();
    let variable = aql::helpers::document_variable();
    let document_ref = aql::helpers::variable_reference(&variable);

    let filter = filter::parse_filter_object(&query_request.filter)
        .map(|parsed| filtering::translate_expression(&mut state, &document_ref, &parsed))
        .map(aql::ast::Filter);

    let search = query_request
        .search
        .as_ref()
        .map(|term| search::translate_search(&env, &variable, term))
        .transpose()?;

    // a search term forces relevance ranking over any explicit sort
    let sort = match &search {
        Some(translated) => translated.ranking.clone(),
        None => match &query_request.sort {
            Some(sort) => sorting::translate_sort(&variable, sort)?,
            None => aql::ast::Sort::None,
        },
    };

    let limit = translate_limit(env.max_limit(), query_request.limit, query_request.skip);

    let return_ = projection::translate_projection(
        &variable,
        env.key_field(),
        query_request.select.as_deref(),
    );

    // searching iterates the collection's view so the SEARCH clause and
    // ranking apply
    let source = match &search {
        Some(translated) => aql::ast::IterationSource::View(translated.view.clone()),
        None => aql::ast::IterationSource::Collection(aql::ast::CollectionName(
            query_request.collection.clone(),
        )),
    };

    let statement = aql::ast::Statement {
        for_: aql::ast::For {
            variable,
            source,
        },
        search: search.map(|translated| translated.clause),
        filter,
        sort,
        limit,
        return_,
    };

    tracing::info!("AQL AST: {:?}", statement);
    Ok(aql::execution_plan::simple_exec_plan(
        query_request.collection,
        statement,
    ))
}

/// Apply the configured ceiling to the requested page size. No request
/// and no offset means no LIMIT clause at all; otherwise the count is
/// clamped so callers can never exceed the ceiling, and the offset is
/// honored verbatim.
fn translate_limit(max_limit: u64, requested: Option<u64>, skip: u64) -> aql::ast::Limit {
    match requested {
        None if skip == 0 => aql::ast::Limit::None,
        _ => aql::ast::Limit::SkipAndCount {
            skip,
            count: requested.unwrap_or(max_limit).min(max_limit),
        },
    }
}
