//! Input normalization for summaries that arrive as JSON string literals.
//!
//! Model responses are sometimes forwarded still encoded, e.g. `"## Title\n- point"`
//! with the surrounding quotes and the escape sequences intact.

/// Strip enclosing quotes and undo JSON string escapes.
///
/// `\\` is unescaped last so that it cannot manufacture new escape sequences
/// for the earlier substitutions.
pub fn preprocess(raw: &str) -> String {
    let unquoted = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };

    unquoted
        .replace("\\\"", "\"")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
        .replace("\\\\", "\\")
}
