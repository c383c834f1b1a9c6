//! Safe rendering and text export for AI video summaries
//!
//!     Summaries come back from a model as markdown-flavored text, sometimes still wrapped as a
//!     JSON string literal. This crate turns them into a small, allow-listed markup vocabulary
//!     for display, and turns that markup back into structured plain text for export.
//!
//!     This is a pure lib: it powers recap-cli but is shell agnostic, so nothing here prints,
//!     reads env vars or touches files.
//!
//! Architecture
//!
//!     Forward rendering is one parse followed by tree rewrites, not a chain of string
//!     substitutions:
//!
//!         preprocess → comrak → RcDom → highlight → timestamps → links → serialize → sanitize
//!
//!     Every pass after comrak works on the same `RcDom`, so "inside a code block" or "inside
//!     an anchor" is a question about ancestors rather than about regex context. The sanitizer
//!     (ammonia) runs last and has the final word on what survives.
//!
//!     Export walks any [`MarkupNode`] tree; `Handle` from `markup5ever_rcdom` is the provided
//!     implementation.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── preprocess.rs           # JSON-literal unescaping
//!     ├── dom.rs                  # RcDom helpers
//!     ├── render                  # Forward pipeline (comrak + passes)
//!     ├── highlight               # Code blocks (syntect behind HighlightEngine)
//!     ├── timestamps.rs           # Segment AST + anchor rewriting
//!     ├── links.rs                # target/rel hardening
//!     ├── sanitize.rs             # ammonia allow-list
//!     ├── tree.rs                 # MarkupNode trait
//!     ├── export.rs               # Markup → text
//!     ├── format.rs               # Format trait definition
//!     ├── formats                 # html, text
//!     └── registry.rs             # FormatRegistry
//!
//! Testing
//!
//!     tests
//!     ├── render
//!     ├── export
//!     └── sanitize
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes
//!     them as modules.
//!
//! Timestamps
//!
//!     `1:23` and `1:02:30` become anchors carrying `data-seconds`. Bracketed clusters such as
//!     `[1:23, 2:45]` are linked first and lose their brackets; the remaining tokens are
//!     linked afterwards. The two passes share a [`timestamps::Segment`] list and the second
//!     pass only ever sees unprocessed text.

pub mod dom;
pub mod error;
pub mod export;
pub mod format;
pub mod formats;
pub mod highlight;
pub mod links;
pub mod preprocess;
pub mod registry;
pub mod render;
pub mod sanitize;
pub mod timestamps;
pub mod tree;

pub use error::RenderError;
pub use export::{export_markup, export_with_options, ExportOptions};
pub use format::Format;
pub use highlight::{CodeHighlighter, HighlightEngine, SyntectEngine};
pub use registry::FormatRegistry;
pub use render::{RenderOptions, Renderer};
pub use tree::{MarkupNode, NodeKind};

use serde_json::Value;

/// Render a summary with default options.
///
/// `None` is a caller bug (the summary field was absent) and is rejected.
pub fn render_summary(raw: Option<&str>) -> Result<String, RenderError> {
    let raw = raw.ok_or(RenderError::MissingInput)?;
    Ok(Renderer::default().render(raw))
}

/// Render the summary field of a message payload.
pub fn render_value(value: &Value) -> Result<String, RenderError> {
    render_summary(Some(summary_text(value)?))
}

/// The summary text carried by a JSON value.
///
/// Strings are the summary; `null` means none was supplied.
pub fn summary_text(value: &Value) -> Result<&str, RenderError> {
    match value {
        Value::String(text) => Ok(text),
        Value::Null => Err(RenderError::MissingInput),
        other => Err(RenderError::InvalidInput(format!(
            "expected a string, found {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Export a rendered tree as structured plain text.
pub fn export_as_text<N: MarkupNode>(root: &N) -> String {
    export::export_as_text(root)
}
