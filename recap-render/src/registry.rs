//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name.

use std::collections::HashMap;

use crate::error::RenderError;
use crate::export::ExportOptions;
use crate::format::Format;
use crate::formats::{HtmlFormat, TextFormat};
use crate::render::RenderOptions;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let text = registry.convert("### Title", "text")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, RenderError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| RenderError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        let mut matches: Vec<_> = self
            .formats
            .values()
            .filter(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|format| format.name().to_string())
            .collect();
        matches.sort();
        matches.into_iter().next()
    }

    /// Convert a summary using the named format
    pub fn convert(&self, summary: &str, format: &str) -> Result<String, RenderError> {
        self.get(format)?.convert(summary)
    }

    /// Create a registry with the built-in formats using the given options
    pub fn with_options(render: RenderOptions, export: ExportOptions) -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat::new(render.clone()));
        registry.register(TextFormat::new(render, export));
        registry
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        Self::with_options(RenderOptions::default(), ExportOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
