//! Configuration loader for the recap tools.
//!
//! `defaults/recap.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RecapConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use recap_render::{ExportOptions, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/recap.default.toml");

/// Top-level configuration consumed by recap applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RecapConfig {
    pub render: RenderConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Forward rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub hard_breaks: bool,
    pub autolink: bool,
    pub highlight: HighlightConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub enabled: bool,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            hard_breaks: config.hard_breaks,
            autolink: config.autolink,
            highlight_code: config.highlight.enabled,
        }
    }
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions::from(&config)
    }
}

/// Text export knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub indent_width: usize,
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        ExportOptions {
            indent_width: config.indent_width,
        }
    }
}

impl From<ExportConfig> for ExportOptions {
    fn from(config: ExportConfig) -> Self {
        ExportOptions::from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RecapConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RecapConfig, ConfigError> {
    Loader::new().build()
}
