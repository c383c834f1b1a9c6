//! Format trait definition
//!
//! A format turns one summary into one output representation. Both built-in
//! formats start from the forward renderer; `text` additionally runs the exporter
//! over the rendered markup.

use crate::error::RenderError;

/// Trait for summary output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn convert(&self, summary: &str) -> Result<String, RenderError> {
///         Ok(summary.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "text")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Convert raw summary text into this format
    fn convert(&self, summary: &str) -> Result<String, RenderError>;
}
