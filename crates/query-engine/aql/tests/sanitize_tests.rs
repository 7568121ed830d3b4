//! Tests for the field name sanitizer.

use query_engine_aql::aql::sanitize::sanitize_field_name;

#[test]
fn passes_plain_identifiers_through() {
    assert_eq!(sanitize_field_name("displayName"), "displayName");
    assert_eq!(sanitize_field_name("address.city"), "address.city");
    assert_eq!(sanitize_field_name("items[*].qty"), "items[*].qty");
    assert_eq!(sanitize_field_name("_key"), "_key");
}

#[test]
fn cuts_at_the_first_whitespace() {
    assert_eq!(
        sanitize_field_name("name != 1 DROP everything//"),
        "name"
    );
    assert_eq!(sanitize_field_name("a\tRETURN doc"), "a");
}

#[test]
fn strips_comment_introducers_and_colons() {
    assert_eq!(sanitize_field_name("field//"), "field");
    assert_eq!(sanitize_field_name("fi/*eld*/"), "field");
    assert_eq!(sanitize_field_name("a:b"), "ab");
    assert_eq!(
        sanitize_field_name("profileVisibility\":0,\"church\":doc}//"),
        "profileVisibility0churchdoc"
    );
}

#[test]
fn is_idempotent() {
    let inputs = [
        "displayName",
        "name != 1 DROP everything//",
        "a:b",
        "fi/*eld*/",
        "items[*].qty",
        "@value1 RETURN doc//",
        "",
        "   ",
        "////",
    ];
    for input in inputs {
        let once = sanitize_field_name(input);
        assert_eq!(sanitize_field_name(&once), once, "input: {input:?}");
    }
}

#[test]
fn garbage_only_input_becomes_empty() {
    assert_eq!(sanitize_field_name("//"), "");
    assert_eq!(sanitize_field_name("$"), "");
}
