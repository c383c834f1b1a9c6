use crate::common::render;

#[test]
fn test_autolinked_url_is_hardened() {
    assert_eq!(
        render("See https://example.com"),
        "<p>See <a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">https://example.com</a></p>"
    );
}

#[test]
fn test_internal_links_unchanged() {
    assert_eq!(render("[top](#intro)"), "<p><a href=\"#intro\">top</a></p>");
    assert_eq!(render("[home](/watch)"), "<p><a href=\"/watch\">home</a></p>");
    assert_eq!(render("[up](../notes)"), "<p><a href=\"../notes\">up</a></p>");
}

#[test]
fn test_protocol_relative_is_external() {
    let html = render("[cdn](//cdn.example.com/a)");
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn test_existing_rel_merged_without_duplicates() {
    assert_eq!(
        render("<a href=\"https://x.test\" rel=\"nofollow noopener\">x</a>"),
        "<p><a href=\"https://x.test\" rel=\"nofollow noopener noreferrer\" target=\"_blank\">x</a></p>"
    );
}

#[test]
fn test_mailto_is_hardened() {
    let html = render("[mail](mailto:team@example.com)");
    assert!(html.contains("href=\"mailto:team@example.com\""));
    assert!(html.contains("target=\"_blank\""));
}
