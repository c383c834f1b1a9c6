use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use insta::assert_snapshot;
use markup5ever_rcdom::RcDom;
use recap_render::dom::Fragment;
use recap_render::export::{export_markup_with_options, ListContext};

use crate::common::render;
use recap_render::{export_as_text, export_markup, ExportOptions};

#[test]
fn test_headings_and_paragraphs() {
    let text = export_markup("<h2>Overview</h2>\n<p>First point.</p>\n<p></p>\n<p>Second point.</p>");
    assert_snapshot!(text, @r"
    ## Overview

    First point.

    Second point.
    ");
}

#[test]
fn test_three_level_list() {
    let markup = "<ul>\n<li>One\n<ul>\n<li>Two\n<ul>\n<li>Three</li>\n</ul>\n</li>\n</ul>\n</li>\n<li>Back</li>\n</ul>";
    assert_snapshot!(export_markup(markup), @r"
    - One
      - Two
        - Three
    - Back
    ");
}

#[test]
fn test_mixed_ordered_and_unordered() {
    let markup = "<ol>\n<li>Step<ul><li>detail</li></ul></li>\n<li>Next</li>\n</ol>\n<p>After</p>";
    assert_snapshot!(export_markup(markup), @r"
    1. Step
      - detail
    1. Next

    After
    ");
}

#[test]
fn test_loose_list_items() {
    let markup = "<ul>\n<li>\n<p>Alpha</p>\n</li>\n<li>\n<p>Beta</p>\n</li>\n</ul>";
    assert_eq!(export_markup(markup), "- Alpha\n- Beta");
}

#[test]
fn test_anchors() {
    let markup = "<p>Watch <a href=\"javascript:void(0)\" data-seconds=\"83\" class=\"timestamp-link\">1:23</a> \
                  or read <a href=\"https://example.com\" target=\"_blank\">the post</a> \
                  and <a>plain</a></p>";
    assert_eq!(
        export_markup(markup),
        "Watch [1:23] or read [the post](https://example.com) and plain"
    );
}

#[test]
fn test_code_block_is_fenced_and_decoded() {
    let markup = "<pre class=\"code-block\" data-language=\"Rust\"><code class=\"language-rust\">\
                  <span class=\"hl-source\">if a &lt; b &amp;&amp; c {}\n</span></code></pre>\n<p>done</p>";
    assert_snapshot!(export_markup(markup), @r"
    ```
    if a < b && c {}
    ```

    done
    ");
}

#[test]
fn test_details_summary_in_bold() {
    let markup = "<details><summary>Show more</summary>\n<p>Hidden</p>\n</details>";
    assert_eq!(export_markup(markup), "**Show more**\n\nHidden");
}

#[test]
fn test_excess_newlines_collapse() {
    assert_eq!(export_markup("<p>a</p>\n\n\n\n<p>b</p>"), "a\n\nb");
}

#[test]
fn test_indent_width_option() {
    let options = ExportOptions { indent_width: 3 };
    assert_eq!(
        export_markup_with_options("<ul><li>a<ol><li>b</li></ol></li></ul>", &options),
        "- a\n   1. b"
    );
}

#[test]
fn test_export_over_parsed_tree() {
    let fragment = Fragment::parse("<h1>T</h1><ul><li>x</li></ul>");
    assert_eq!(export_as_text(&fragment.body), "# T\n\n- x");
}

#[test]
fn test_export_from_parsed_document_root() {
    let markup = render("### Title\n\n* a\n  * b");
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .one(markup.as_bytes());

    assert_snapshot!(export_as_text(&dom.document), @r"
    ### Title

    - a
      - b
    ");
    assert_eq!(export_as_text(&dom.document), export_markup(&markup));
}

#[test]
fn test_empty_heading_emits_marker() {
    assert_snapshot!(export_markup("<h3></h3>\n<p>Body</p>"), @r"
    ###

    Body
    ");
}

#[test]
fn test_item_depth_from_context() {
    let ctx = ListContext {
        lists: 3,
        ordered: false,
    };
    assert_eq!(ctx.depth(), 2);
    assert_eq!(ListContext::default().depth(), 0);
}
