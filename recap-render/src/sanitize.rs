//! Allow-list sanitizer built on `ammonia`.
//!
//! | Category    | Tags                    | Attributes                        |
//! |-------------|-------------------------|-----------------------------------|
//! | Structure   | h1–h6, p, br            |                                   |
//! | Emphasis    | strong, em, code, pre   |                                   |
//! | Lists       | ul, ol, li              |                                   |
//! | Links       | a, span                 | href, class, target, rel, data-*  |
//! | Collapsible | details, summary        | open                              |
//!
//! `class` and `data-*` are accepted on every allowed tag. `script` and `style` are
//! removed together with their content; comments are dropped.

use ammonia::Builder;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::timestamps::TIMESTAMP_HREF;

pub const ALLOWED_TAGS: [&str; 19] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "strong", "em", "code", "pre", "ul", "ol",
    "li", "a", "span", "details", "summary",
];

const URL_SCHEMES: [&str; 4] = ["http", "https", "mailto", "javascript"];

static SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(build_sanitizer);

fn build_sanitizer() -> Builder<'static> {
    let tag_attributes = HashMap::from([
        ("a", HashSet::from(["href", "target", "rel"])),
        ("details", HashSet::from(["open"])),
    ]);

    let mut builder = Builder::default();
    builder
        .tags(HashSet::from(ALLOWED_TAGS))
        .clean_content_tags(HashSet::from(["script", "style"]))
        .generic_attributes(HashSet::from(["class"]))
        .generic_attribute_prefixes(HashSet::from(["data-"]))
        .tag_attributes(tag_attributes)
        .link_rel(None)
        .url_schemes(HashSet::from(URL_SCHEMES))
        .strip_comments(true)
        .attribute_filter(filter_attribute);
    builder
}

/// Drop script URLs other than the inert timestamp href.
fn filter_attribute<'u>(_element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    if attribute == "href" && is_script_url(value) && value.trim() != TIMESTAMP_HREF {
        return None;
    }
    Some(Cow::Borrowed(value))
}

/// Browsers ignore embedded whitespace and control characters in the scheme.
fn is_script_url(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();
    normalized.starts_with("javascript:")
}

/// Reduce markup to the allow-listed vocabulary.
pub fn sanitize(markup: &str) -> String {
    SANITIZER.clean(markup).to_string()
}
