//! Error types for rendering and export operations

use std::fmt;

/// Errors that can occur while rendering or exporting a summary
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// No summary was supplied (a null or absent value)
    MissingInput,
    /// The supplied value is not a summary string
    InvalidInput(String),
    /// Format not found in registry
    FormatNotFound(String),
    /// The highlighting engine rejected a code block
    Highlight(String),
    /// Markup could not be serialized
    Serialization(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingInput => write!(f, "No summary text was provided"),
            RenderError::InvalidInput(msg) => write!(f, "Invalid summary input: {msg}"),
            RenderError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            RenderError::Highlight(msg) => write!(f, "Highlighting failed: {msg}"),
            RenderError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
