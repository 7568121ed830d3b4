//! Strip unsafe characters from property names before they are embedded
//! as literal text in a statement.

/// Characters a field path segment may contain: identifier characters
/// plus the dotted-path and array-traversal syntax.
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']' | '*' | '-')
}

/// Reduce a raw property name to its safe form.
///
/// The name is cut at the first whitespace character (a field name is a
/// single word), then every character outside the allow-list is removed.
/// Idempotent: sanitizing an already-sanitized name returns it unchanged.
/// Emits a warning when the input had to be altered.
pub fn sanitize_field_name(field_name: &str) -> String {
    let word = field_name
        .split_whitespace()
        .next()
        .unwrap_or_default();
    let sanitized: String = word.chars().filter(|c| is_allowed(*c)).collect();
    if sanitized != field_name {
        tracing::warn!(
            input = field_name,
            output = %sanitized,
            "field name contained unsafe characters and was sanitized"
        );
    }
    sanitized
}
