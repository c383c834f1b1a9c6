use crate::common::render;
use recap_render::export_markup;
use recap_render::{HighlightEngine, RenderError, RenderOptions, Renderer};

struct BrokenEngine;

impl HighlightEngine for BrokenEngine {
    fn resolve(&self, language: &str) -> Option<String> {
        Some(language.to_string())
    }

    fn detect(&self, _source: &str) -> Option<String> {
        Some("Anything".to_string())
    }

    fn highlight(&self, _syntax_name: &str, _source: &str) -> Result<String, RenderError> {
        Err(RenderError::Highlight("broken".to_string()))
    }
}

#[test]
fn test_requested_language_is_highlighted() {
    let html = render("```rust\nfn main() {}\n```");
    assert!(html.starts_with(
        "<pre class=\"code-block\" data-language=\"Rust\"><code class=\"language-rust\">"
    ));
    assert!(html.contains("<span class=\"hl-"));
    assert!(html.ends_with("</code></pre>"));
}

#[test]
fn test_block_without_language_is_labeled_text() {
    let html = render("```\nhello world\n```");
    assert!(html.starts_with("<pre class=\"code-block\" data-language=\"Text\"><code>"));
    assert!(html.contains("hello world"));
}

#[test]
fn test_unknown_language_keeps_tag() {
    let html = render("```foobar\nx = 1\n```");
    assert!(html.starts_with(
        "<pre class=\"code-block\" data-language=\"Text\"><code class=\"language-foobar\">"
    ));
}

#[test]
fn test_language_detected_from_shebang() {
    let html = render("```\n#!/usr/bin/env python\nprint(1)\n```");
    assert!(html.contains("data-language=\"Python\""));
}

#[test]
fn test_source_is_decoded_before_highlighting() {
    let html = render("```\nif a < b && c > d { \"q\" }\n```");
    assert!(!html.contains("&amp;lt;"));
    assert!(!html.contains("&amp;amp;"));
    assert_eq!(
        export_markup(&html),
        "```\nif a < b && c > d { \"q\" }\n```"
    );
}

#[test]
fn test_failing_engine_falls_back() {
    let renderer = Renderer::with_engine(RenderOptions::default(), Box::new(BrokenEngine));
    assert_eq!(
        renderer.render("```python\nprint(\"hi\")\n```"),
        "<pre class=\"code-block\" data-language=\"Python\"><code class=\"language-python\">print(\"hi\")\n</code></pre>"
    );
    assert_eq!(
        renderer.render("```\nx\n```"),
        "<pre class=\"code-block\" data-language=\"Code\"><code>x\n</code></pre>"
    );
}

#[test]
fn test_code_block_has_no_inline_style() {
    let html = render("```python\ndef f():\n    return 1\n```");
    assert!(!html.contains("style="));
}
