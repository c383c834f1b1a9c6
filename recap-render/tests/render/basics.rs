use crate::common::render;
use recap_render::{render_summary, render_value, RenderError};
use serde_json::{json, Value};

#[test]
fn test_empty_input_renders_empty() {
    assert_eq!(render(""), "");
    assert_eq!(render("   "), "");
    assert_eq!(render("\n\n\t"), "");
}

#[test]
fn test_missing_input_is_rejected() {
    assert_eq!(render_summary(None), Err(RenderError::MissingInput));
    assert_eq!(render_value(&Value::Null), Err(RenderError::MissingInput));
    assert!(matches!(
        render_value(&json!({"summary": "x"})),
        Err(RenderError::InvalidInput(_))
    ));
}

#[test]
fn test_heading() {
    assert_eq!(render("### X"), "<h3>X</h3>");
    assert_eq!(render("# One\n\n## Two"), "<h1>One</h1>\n<h2>Two</h2>");
}

#[test]
fn test_unordered_list_keeps_order() {
    assert_eq!(
        render("* Item 1\n* Item 2"),
        "<ul>\n<li>Item 1</li>\n<li>Item 2</li>\n</ul>"
    );
    assert_eq!(render("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        render("1. First\n2. Second"),
        "<ol>\n<li>First</li>\n<li>Second</li>\n</ol>"
    );
}

#[test]
fn test_nested_list() {
    let html = render("* Parent\n  * Child");
    assert_eq!(
        html,
        "<ul>\n<li>Parent\n<ul>\n<li>Child</li>\n</ul>\n</li>\n</ul>"
    );
}

#[test]
fn test_single_newline_becomes_line_break() {
    assert_eq!(render("Line one\nLine two"), "<p>Line one<br>\nLine two</p>");
}

#[test]
fn test_blank_line_separates_paragraphs() {
    assert_eq!(render("One\n\nTwo"), "<p>One</p>\n<p>Two</p>");
}

#[test]
fn test_inline_emphasis() {
    assert_eq!(
        render("Some **bold**, *italic* and `code`"),
        "<p>Some <strong>bold</strong>, <em>italic</em> and <code>code</code></p>"
    );
}

#[test]
fn test_unterminated_markers_stay_literal() {
    let html = render("**unterminated");
    assert!(!html.is_empty());
    assert_eq!(html, "<p>**unterminated</p>");
}

#[test]
fn test_json_escaped_summary() {
    let raw = r####""## Key points\n\n* \"Quoted\" idea\n* Tab\there""####;
    assert_eq!(
        render(raw),
        "<h2>Key points</h2>\n<ul>\n<li>\"Quoted\" idea</li>\n<li>Tab\there</li>\n</ul>"
    );
}

#[test]
fn test_details_pass_through() {
    let html = render("<details><summary>More</summary>\n\nHidden body\n\n</details>");
    assert!(html.contains("<details><summary>More</summary>"));
    assert!(html.contains("<p>Hidden body</p>"));
    assert!(html.ends_with("</details>"));
}

#[test]
fn test_script_is_removed_with_content() {
    let html = render("Hello <script>alert(1)</script> world");
    assert!(!html.contains("script"));
    assert!(!html.contains("alert"));
    assert!(html.starts_with("<p>Hello"));
}

#[test]
fn test_event_handlers_and_images_removed() {
    let html = render("x <img src=x onerror=alert(1)> <span style=\"color:red\" onclick=\"y()\">s</span>");
    assert!(!html.contains("<img"));
    assert!(!html.contains("onerror"));
    assert!(!html.contains("onclick"));
    assert!(!html.contains("style="));
    assert!(html.contains("<span>s</span>"));
}

#[test]
fn test_script_link_href_dropped() {
    let html = render("[click](javascript:alert(1))");
    assert!(!html.contains("javascript:alert"));
    assert!(html.contains(">click</a>"));
}
