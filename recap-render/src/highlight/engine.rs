//! Syntect-backed highlighting engine.

use std::sync::LazyLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::HighlightEngine;
use crate::error::RenderError;

/// Syntax name used when nothing better is known.
pub const PLAIN_TEXT: &str = "Plain Text";

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Class style for emitted spans (prefix avoids clashing with page styles).
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

/// Highlighting engine over syntect's bundled syntax definitions.
///
/// Output is class-based (`<span class="hl-…">`), so no inline style is emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntectEngine;

impl SyntectEngine {
    pub fn new() -> Self {
        SyntectEngine
    }
}

impl HighlightEngine for SyntectEngine {
    fn resolve(&self, language: &str) -> Option<String> {
        SYNTAX_SET
            .find_syntax_by_token(language)
            .map(|syntax| syntax.name.clone())
    }

    fn detect(&self, source: &str) -> Option<String> {
        let first_line = source.lines().next()?;
        SYNTAX_SET
            .find_syntax_by_first_line(first_line)
            .filter(|syntax| syntax.name != PLAIN_TEXT)
            .map(|syntax| syntax.name.clone())
    }

    fn highlight(&self, syntax_name: &str, source: &str) -> Result<String, RenderError> {
        let syntax = SYNTAX_SET
            .find_syntax_by_name(syntax_name)
            .ok_or_else(|| RenderError::Highlight(format!("unknown syntax '{syntax_name}'")))?;

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);
        for line in LinesWithEndings::from(source) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| RenderError::Highlight(e.to_string()))?;
        }
        Ok(generator.finalize())
    }
}
