//! Forward rendering (summary text → sanitized markup)
//!
//! Pipeline: preprocess → comrak → RcDom → highlight code → link timestamps →
//! harden links → serialize → sanitize.
//!
//! The DOM passes run on one parsed tree, so each stage sees real element
//! boundaries instead of matching on strings.

mod markdown;

pub use markdown::markdown_to_markup;

use crate::dom::Fragment;
use crate::highlight::{CodeHighlighter, HighlightEngine};
use crate::links::harden_links;
use crate::preprocess::preprocess;
use crate::sanitize::sanitize;
use crate::timestamps::linkify_tree;

/// Options for forward rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Single newlines become `<br>` line breaks
    pub hard_breaks: bool,
    /// Bare URLs become links
    pub autolink: bool,
    /// Syntax-highlight fenced code blocks
    pub highlight_code: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            hard_breaks: true,
            autolink: true,
            highlight_code: true,
        }
    }
}

/// Renders summaries into the allow-listed markup vocabulary.
pub struct Renderer {
    options: RenderOptions,
    highlighter: CodeHighlighter,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        let highlighter = CodeHighlighter::default().with_enabled(options.highlight_code);
        Renderer {
            options,
            highlighter,
        }
    }

    /// Use a specific highlighting engine instead of the bundled one.
    pub fn with_engine(options: RenderOptions, engine: Box<dyn HighlightEngine>) -> Self {
        let highlighter = CodeHighlighter::new(engine).with_enabled(options.highlight_code);
        Renderer {
            options,
            highlighter,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render raw (possibly JSON-escaped) summary text.
    ///
    /// Empty or whitespace-only input renders to an empty string.
    pub fn render(&self, raw: &str) -> String {
        let text = preprocess(raw);
        if text.trim().is_empty() {
            return String::new();
        }

        let base = markdown_to_markup(&text, &self.options);
        let fragment = Fragment::parse(&base);

        let code_blocks = self.highlighter.highlight_tree(&fragment.body);
        let timestamps = linkify_tree(&fragment.body);
        let external_links = harden_links(&fragment.body);
        tracing::debug!(
            code_blocks,
            timestamps,
            external_links,
            "post-processed summary markup"
        );

        let assembled = match fragment.to_markup() {
            Ok(markup) => markup,
            Err(err) => {
                tracing::warn!(error = %err, "post-processing dropped, sanitizing base markup");
                base
            }
        };

        sanitize(&assembled).trim().to_string()
    }
}
