use crate::common::{render, timestamp_anchor};

#[test]
fn test_grouped_timestamps_joined_by_comma() {
    let html = render("[1:23, 2:45]");
    assert_eq!(
        html,
        format!(
            "<p>{}, {}</p>",
            timestamp_anchor(83, "1:23"),
            timestamp_anchor(165, "2:45")
        )
    );
    assert!(!html.contains('['));
    assert!(!html.contains(']'));
}

#[test]
fn test_grouped_range_uses_hyphen() {
    assert_eq!(
        render("Covered in (1:00 - 1:30)"),
        format!(
            "<p>Covered in {} - {}</p>",
            timestamp_anchor(60, "1:00"),
            timestamp_anchor(90, "1:30")
        )
    );
}

#[test]
fn test_standalone_timestamps() {
    assert_eq!(
        render("Intro (0:45) and main point at 1:02:30."),
        format!(
            "<p>Intro {} and main point at {}.</p>",
            timestamp_anchor(45, "0:45"),
            timestamp_anchor(3750, "1:02:30")
        )
    );
}

#[test]
fn test_parenthetical_prose_keeps_brackets() {
    assert_eq!(
        render("A claim (see 4:10)"),
        format!("<p>A claim (see {})</p>", timestamp_anchor(250, "4:10"))
    );
}

#[test]
fn test_timestamp_in_heading_and_list() {
    let html = render("### Part 1 (12:00)\n\n* Start 0:10\n  * Detail [0:20]");
    assert!(html.starts_with(&format!(
        "<h3>Part 1 {}</h3>",
        timestamp_anchor(720, "12:00")
    )));
    assert!(html.contains(&timestamp_anchor(10, "0:10")));
    assert!(html.contains(&format!("Detail {}", timestamp_anchor(20, "0:20"))));
}

#[test]
fn test_code_and_links_are_not_linkified() {
    assert_eq!(render("`1:23`"), "<p><code>1:23</code></p>");
    assert!(!render("```\nat 1:23\n```").contains("data-seconds"));
    assert!(!render("[at 1:23](https://example.com)").contains("data-seconds"));
}

#[test]
fn test_timestamp_anchors_are_not_hardened() {
    let html = render("[1:23]");
    assert!(!html.contains("target="));
    assert!(!html.contains("rel="));
}

#[test]
fn test_non_timestamps_left_alone() {
    assert_eq!(render("Ratio 16:9 at 12:30pm"), "<p>Ratio 16:9 at 12:30pm</p>");
}
