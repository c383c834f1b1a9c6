use crate::common::render;
use insta::assert_snapshot;
use recap_render::export_markup;

#[test]
fn test_heading_bold_and_nested_list() {
    let html = render("### Title\n\nSome **bold** text\n\n* Parent\n  * Child");
    let text = export_markup(&html);

    assert!(text.contains("### Title"));
    assert!(text.contains("**bold**"));
    assert!(text.contains("\n- Parent"));
    assert!(text.contains("\n  - Child"));
    assert_snapshot!(text, @r"
    ### Title

    Some **bold** text

    - Parent
      - Child
    ");
}

#[test]
fn test_summary_with_timestamps() {
    let summary = "## Summary\n\nThe talk opens with context [0:00, 0:45].\n\n\
                   * Setup (1:10 - 2:30)\n* Demo at 5:05\n  * Edge cases [6:00]\n\n\
                   Closing notes.";
    assert_snapshot!(export_markup(&render(summary)), @r"
    ## Summary

    The talk opens with context [0:00], [0:45].

    - Setup [1:10] - [2:30]
    - Demo at [5:05]
      - Edge cases [6:00]

    Closing notes.
    ");
}

#[test]
fn test_line_breaks_survive_export() {
    let text = export_markup(&render("First line\nSecond line"));
    assert_eq!(text, "First line\nSecond line");
}

#[test]
fn test_code_and_links_round_trip() {
    let summary = "Read [the docs](https://docs.example.com) first.\n\n```rust\nlet v = vec![1, 2];\n```";
    assert_snapshot!(export_markup(&render(summary)), @r"
    Read [the docs](https://docs.example.com) first.

    ```
    let v = vec![1, 2];
    ```
    ");
}

#[test]
fn test_json_escaped_summary_round_trip() {
    let raw = r####""### Notes\n\n1. One\n2. Two""####;
    assert_eq!(export_markup(&render(raw)), "### Notes\n\n1. One\n1. Two");
}
