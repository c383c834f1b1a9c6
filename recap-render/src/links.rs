//! Link hardening
//!
//! External anchors open in a new browsing context without leaking the opener or the
//! referrer: `target="_blank"` is added if missing and `noopener`/`noreferrer` are
//! merged into `rel`. Internal links (`#…`, `/…`, `./…`, `../…`) and timestamp
//! anchors are left exactly as they are.

use markup5ever_rcdom::Handle;

use crate::dom::{find_elements_by_name, get_attribute, has_class, set_attribute};
use crate::timestamps::TIMESTAMP_LINK_CLASS;

const REQUIRED_REL: [&str; 2] = ["noopener", "noreferrer"];

/// Whether an href stays inside the current page or site.
///
/// Protocol-relative `//host/…` URLs point elsewhere and are not internal.
pub fn is_internal_href(href: &str) -> bool {
    let href = href.trim();
    if href.starts_with("//") {
        return false;
    }
    href.starts_with('#') || href.starts_with('/') || href.starts_with("./") || href.starts_with("../")
}

/// Merge the required tokens into an existing `rel` value, keeping its order.
pub fn merge_rel(existing: Option<&str>) -> String {
    let mut tokens: Vec<&str> = existing
        .map(|rel| rel.split_ascii_whitespace().collect())
        .unwrap_or_default();

    for required in REQUIRED_REL {
        if !tokens.iter().any(|t| t.eq_ignore_ascii_case(required)) {
            tokens.push(required);
        }
    }

    tokens.join(" ")
}

/// Harden one anchor element. Returns whether it was an external link.
pub fn harden_anchor(anchor: &Handle) -> bool {
    if has_class(anchor, TIMESTAMP_LINK_CLASS) {
        return false;
    }
    let Some(href) = get_attribute(anchor, "href") else {
        return false;
    };
    if is_internal_href(&href) {
        return false;
    }

    if get_attribute(anchor, "target").is_none() {
        set_attribute(anchor, "target", "_blank");
    }
    let rel = merge_rel(get_attribute(anchor, "rel").as_deref());
    set_attribute(anchor, "rel", &rel);
    true
}

/// Harden every anchor below `root`. Returns how many were external.
pub fn harden_links(root: &Handle) -> usize {
    find_elements_by_name(root, "a")
        .iter()
        .filter(|anchor| harden_anchor(anchor))
        .count()
}
