//! Code block highlighting
//!
//! The base markdown renderer emits fenced code as `<pre><code class="language-x">`
//! with an entity-encoded body. This pass decodes the body, picks a syntax (requested
//! language first, then detection), and replaces the block with a labeled,
//! class-highlighted one:
//!
//! ```text
//! <pre class="code-block" data-language="Rust"><code class="language-rust">…</code></pre>
//! ```
//!
//! Highlighting never fails the render: on any engine error the block is emitted
//! unhighlighted with the decoded source.

mod engine;

pub use engine::{SyntectEngine, PLAIN_TEXT};

use markup5ever_rcdom::Handle;

use crate::dom::{
    find_first_element, get_attribute, is_element, serialize_children, Fragment,
};
use crate::error::RenderError;

/// Label when a block has no language and nothing was detected.
pub const DETECTED_NONE_LABEL: &str = "Text";

/// Label for an unhighlighted block without a requested language.
pub const FALLBACK_LABEL: &str = "Code";

/// A syntax highlighting backend
pub trait HighlightEngine: Send + Sync {
    /// Map a fence language token to a syntax name, if the engine knows it.
    fn resolve(&self, language: &str) -> Option<String>;

    /// Guess a syntax name from the source itself.
    fn detect(&self, source: &str) -> Option<String>;

    /// Highlight decoded source with the named syntax, returning escaped markup.
    fn highlight(&self, syntax_name: &str, source: &str) -> Result<String, RenderError>;
}

/// Rewrites fenced code blocks into labeled, highlighted blocks.
pub struct CodeHighlighter {
    engine: Box<dyn HighlightEngine>,
    enabled: bool,
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new(Box::new(SyntectEngine::new()))
    }
}

impl CodeHighlighter {
    pub fn new(engine: Box<dyn HighlightEngine>) -> Self {
        CodeHighlighter {
            engine,
            enabled: true,
        }
    }

    /// Emit plain labeled blocks without consulting the engine.
    pub fn disabled() -> Self {
        CodeHighlighter {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Render one code block from its language tag and entity-encoded body.
    pub fn render_block(&self, language: Option<&str>, encoded_body: &str) -> String {
        let language = language.map(str::trim).filter(|l| !l.is_empty());
        let source = decode_entities(encoded_body);

        if !self.enabled {
            return plain_block(language, &source);
        }

        let (label, syntax) = match language.and_then(|l| self.engine.resolve(l)) {
            Some(syntax) => (capitalize(language.unwrap_or_default()), syntax),
            None => match self.engine.detect(&source) {
                Some(syntax) => (capitalize(&syntax), syntax),
                None => (DETECTED_NONE_LABEL.to_string(), PLAIN_TEXT.to_string()),
            },
        };

        match self.engine.highlight(&syntax, &source) {
            Ok(highlighted) => block_markup(&label, language, &highlighted),
            Err(err) => {
                tracing::warn!(
                    language = language.unwrap_or(""),
                    syntax = syntax.as_str(),
                    error = %err,
                    "code highlighting failed, emitting plain block"
                );
                plain_block(language, &source)
            }
        }
    }

    /// Replace every `<pre><code>` block below `root`. Returns the number of blocks.
    pub fn highlight_tree(&self, root: &Handle) -> usize {
        let mut count = 0;
        let children = root.children.borrow().clone();
        let mut rebuilt = Vec::with_capacity(children.len());
        let mut changed = false;

        for child in children {
            if is_element(&child, "pre") {
                if let Some(replacement) = self.replace_pre(&child) {
                    count += 1;
                    changed = true;
                    rebuilt.extend(replacement);
                    continue;
                }
            } else {
                count += self.highlight_tree(&child);
            }
            rebuilt.push(child);
        }

        if changed {
            *root.children.borrow_mut() = rebuilt;
        }
        count
    }

    fn replace_pre(&self, pre: &Handle) -> Option<Vec<Handle>> {
        let code = find_first_element(pre, "code")?;
        let language = get_attribute(&code, "class").and_then(|classes| {
            classes
                .split_ascii_whitespace()
                .find_map(|c| c.strip_prefix("language-").map(str::to_string))
        });

        let encoded = match serialize_children(&code) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(error = %err, "could not read code block body");
                return None;
            }
        };

        let block = self.render_block(language.as_deref(), &encoded);
        Some(Fragment::parse(&block).into_nodes())
    }
}

fn plain_block(language: Option<&str>, source: &str) -> String {
    let label = language
        .map(capitalize)
        .unwrap_or_else(|| FALLBACK_LABEL.to_string());
    block_markup(&label, language, &escape_html(source))
}

fn block_markup(label: &str, language: Option<&str>, body: &str) -> String {
    let code_open = match language {
        Some(lang) => format!("<code class=\"language-{}\">", escape_html(lang)),
        None => "<code>".to_string(),
    };
    format!(
        "<pre class=\"code-block\" data-language=\"{}\">{code_open}{body}</code></pre>",
        escape_html(label)
    )
}

/// Decode the entities the base renderer and serializer emit.
///
/// `&amp;` goes last so an encoded entity (`&amp;lt;`) decodes to its literal text.
pub fn decode_entities(encoded: &str) -> String {
    encoded
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Uppercase the first character.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
