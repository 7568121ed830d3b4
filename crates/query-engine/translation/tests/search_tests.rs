//! Tests for search term translation.

mod common;

use query_engine_translation::translation::error::Error;

use serde_json::json;
use similar_asserts::assert_eq;

#[test]
fn fuzzy_term_matches_fuzzy_fields_approximately() -> anyhow::Result<()> {
    let (text, bind_vars) = common::translate(
        &common::person_metadata(),
        common::request(json!({"$search": "Cloia Jerrits"})),
    )?;
    assert_eq!(
        text,
        "FOR doc IN @@collection \
         SEARCH (ANALYZER(NGRAM_MATCH(doc.displayName, @value0, 0.7, \"text_en\"), \"text_en\") \
         OR doc.email == @value1) \
         SORT BM25(doc) DESC \
         RETURN doc"
    );
    // searching iterates the view, not the collection
    assert_eq!(bind_vars[0], ("@collection".to_string(), json!("person_view")));
    assert_eq!(bind_vars[1], ("value0".to_string(), json!("Cloia Jerrits")));
    assert_eq!(bind_vars[2], ("value1".to_string(), json!("Cloia Jerrits")));
    Ok(())
}

#[test]
fn quoted_term_filters_by_phrase_containment() -> anyhow::Result<()> {
    let (text, bind_vars) = common::translate(
        &common::person_metadata(),
        common::request(json!({"$search": "\"Jane Doe\""})),
    )?;
    assert_eq!(
        text,
        "FOR doc IN @@collection \
         FILTER (CONTAINS(LOWER(doc.displayName), LOWER(@value0)) OR doc.email == @value1) \
         SORT BM25(doc) DESC \
         RETURN doc"
    );
    // the quotes are stripped before binding
    assert_eq!(bind_vars[1], ("value0".to_string(), json!("Jane Doe")));
    Ok(())
}

#[test]
fn single_quoted_term_is_exact_too() -> anyhow::Result<()> {
    let (text, bind_vars) = common::translate(
        &common::person_metadata(),
        common::request(json!({"$search": "'Jane Doe'"})),
    )?;
    assert!(text.contains("CONTAINS(LOWER(doc.displayName), LOWER(@value0))"));
    assert_eq!(bind_vars[1], ("value0".to_string(), json!("Jane Doe")));
    Ok(())
}

#[test]
fn numeric_term_compares_numeric_fields_only() -> anyhow::Result<()> {
    let (text, bind_vars) = common::translate(
        &common::person_metadata(),
        common::request(json!({"$search": 53182})),
    )?;
    assert_eq!(
        text,
        "FOR doc IN @@collection \
         SEARCH doc.personID == @value0 \
         SORT BM25(doc) DESC \
         RETURN doc"
    );
    assert_eq!(bind_vars[1], ("value0".to_string(), json!(53182)));
    Ok(())
}

#[test]
fn search_type_gating_on_a_numeric_only_collection() {
    let metadata = common::age_only_metadata();

    let text_term = common::translate(&metadata, common::request(json!({"$search": "fifty"})));
    assert_eq!(
        text_term,
        Err(Error::SearchTypeNotSupported {
            term_type: "string",
            collection: "person".to_string(),
        })
    );

    let number_term = common::translate(&metadata, common::request(json!({"$search": 50})))
        .expect("numeric search is configured");
    assert_eq!(
        number_term.0,
        "FOR doc IN @@collection SEARCH doc.age == @value0 SORT BM25(doc) DESC RETURN doc"
    );
}

#[test]
fn search_term_must_be_a_string_or_number() {
    let metadata = common::person_metadata();

    let null_term = common::translate(&metadata, common::request(json!({"$search": null})));
    assert_eq!(null_term, Err(Error::InvalidSearchTerm("null")));

    let object_term = common::translate(
        &metadata,
        common::request(json!({"$search": {"displayName": "Cloia"}})),
    );
    assert_eq!(object_term, Err(Error::InvalidSearchTerm("object")));
}

#[test]
fn search_requires_configured_fields() {
    let metadata = query_engine_metadata::metadata::Metadata::empty();
    let result = common::translate(&metadata, common::request(json!({"$search": "anything"})));
    assert_eq!(
        result,
        Err(Error::SearchNotConfigured("person".to_string()))
    );
}

#[test]
fn search_ranking_overrides_an_explicit_sort() -> anyhow::Result<()> {
    let (text, _) = common::translate(
        &common::person_metadata(),
        common::request(json!({"$search": "daly", "$sort": {"name": 1}})),
    )?;
    assert!(text.contains("SORT BM25(doc) DESC"));
    assert!(!text.contains("doc.name ASC"));
    Ok(())
}

#[test]
fn search_and_filter_are_separate_anded_clauses() -> anyhow::Result<()> {
    let (text, bind_vars) = common::translate(
        &common::person_metadata(),
        common::request(json!({"$search": "daly", "gender": "Male"})),
    )?;
    assert_eq!(
        text,
        "FOR doc IN @@collection \
         SEARCH (ANALYZER(NGRAM_MATCH(doc.displayName, @value0, 0.7, \"text_en\"), \"text_en\") \
         OR doc.email == @value1) \
         FILTER doc.gender == @value2 \
         SORT BM25(doc) DESC \
         RETURN doc"
    );
    assert_eq!(bind_vars[3], ("value2".to_string(), json!("Male")));
    Ok(())
}

#[test]
fn search_term_never_leaks_into_the_text() -> anyhow::Result<()> {
    let (text, _) = common::translate(
        &common::person_metadata(),
        common::request(json!({"$search": "RETURN doc //"})),
    )?;
    assert!(!text.contains("RETURN doc //"));
    assert!(!text.contains("//"));
    Ok(())
}
