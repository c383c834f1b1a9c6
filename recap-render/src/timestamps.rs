//! Timestamp linkification
//!
//! Time codes such as `1:23` or `1:02:30` become clickable anchors carrying the
//! offset in seconds. Linkification runs in two passes over a [`Segment`] list:
//!
//! 1. Grouped: a `[...]` or `(...)` span made only of timestamps and separators is
//!    replaced by one anchor per timestamp, re-joined with the group's separator
//!    style. The delimiters are dropped.
//! 2. Standalone: remaining word-bounded tokens inside `Text` segments.
//!
//! Pass 2 only looks at `Segment::Text`, so anything pass 1 produced is never
//! scanned twice.

use markup5ever_rcdom::{Handle, NodeData};
use regex::Regex;
use std::sync::LazyLock;

use crate::dom::{create_element, create_text, tag_name};

/// Class marking an anchor as a timestamp reference.
pub const TIMESTAMP_LINK_CLASS: &str = "timestamp-link";

/// Full class list carried by generated timestamp anchors.
pub const TIMESTAMP_LINK_CLASSES: &str = "timestamp-link yt-core-attributed-string__link yt-core-attributed-string__link--call-to-action-color";

/// Inert href used by timestamp anchors; the host page handles the click.
pub const TIMESTAMP_HREF: &str = "javascript:void(0)";

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]+):([0-9]{2})(?::([0-9]{2}))?\b").expect("valid timestamp regex")
});

static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]|\(([^()]*)\)").expect("valid group regex"));

/// Elements whose text is never linkified.
const SKIPPED_ELEMENTS: &[&str] = &["a", "code", "pre", "script", "style"];

/// A recognized time code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    text: String,
    seconds: u64,
}

impl Timestamp {
    /// Parse a token that is exactly one timestamp (`M:SS` or `H:MM:SS`).
    pub fn parse(token: &str) -> Option<Self> {
        let caps = TIMESTAMP_RE.captures(token)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != token.len() {
            return None;
        }
        Self::from_captures(&caps)
    }

    fn from_captures(caps: &regex::Captures<'_>) -> Option<Self> {
        let first: u64 = caps.get(1)?.as_str().parse().ok()?;
        let second: u64 = caps.get(2)?.as_str().parse().ok()?;

        let seconds = match caps.get(3) {
            Some(third) => {
                let third: u64 = third.as_str().parse().ok()?;
                first
                    .checked_mul(3600)?
                    .checked_add(second.checked_mul(60)?)?
                    .checked_add(third)?
            }
            None => first.checked_mul(60)?.checked_add(second)?,
        };

        Some(Timestamp {
            text: caps.get(0)?.as_str().to_string(),
            seconds,
        })
    }

    /// The token as written
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset in seconds
    pub fn seconds(&self) -> u64 {
        self.seconds
    }
}

/// Seconds for a timestamp token, `None` if it is not one.
pub fn seconds_of(token: &str) -> Option<u64> {
    Timestamp::parse(token).map(|ts| ts.seconds)
}

/// A span of text: either still unprocessed, or a recognized timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Timestamp(Timestamp),
}

/// Split text into segments, linking grouped and then standalone timestamps.
pub fn linkify(text: &str) -> Vec<Segment> {
    let grouped = link_groups(text);

    let mut segments = Vec::with_capacity(grouped.len());
    for segment in grouped {
        match segment {
            Segment::Text(text) => segments.extend(link_standalone(&text)),
            timestamp => segments.push(timestamp),
        }
    }
    segments
}

fn link_groups(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in GROUP_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(interior) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        let Some(timestamps) = group_timestamps(interior.as_str()) else {
            continue;
        };

        push_text(&mut segments, &text[cursor..whole.start()]);

        let separator = group_separator(interior.as_str());
        for (i, timestamp) in timestamps.into_iter().enumerate() {
            if i > 0 {
                push_text(&mut segments, separator);
            }
            segments.push(Segment::Timestamp(timestamp));
        }

        cursor = whole.end();
    }

    push_text(&mut segments, &text[cursor..]);
    segments
}

/// Timestamps of a group interior, if it holds nothing but timestamps and separators.
fn group_timestamps(interior: &str) -> Option<Vec<Timestamp>> {
    let mut timestamps = Vec::new();
    let mut cursor = 0;

    for caps in TIMESTAMP_RE.captures_iter(interior) {
        let whole = caps.get(0)?;
        if !is_separator_run(&interior[cursor..whole.start()]) {
            return None;
        }
        timestamps.push(Timestamp::from_captures(&caps)?);
        cursor = whole.end();
    }

    if timestamps.is_empty() || !is_separator_run(&interior[cursor..]) {
        return None;
    }
    Some(timestamps)
}

fn is_separator_run(gap: &str) -> bool {
    gap.chars()
        .all(|c| c.is_whitespace() || matches!(c, ',' | '-' | '–' | '—'))
}

fn group_separator(interior: &str) -> &'static str {
    if interior.contains(',') {
        ", "
    } else if interior.contains(['-', '–', '—']) {
        " - "
    } else {
        " "
    }
}

fn link_standalone(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in TIMESTAMP_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        // Overflowing tokens stay in the surrounding text.
        let Some(timestamp) = Timestamp::from_captures(&caps) else {
            continue;
        };
        push_text(&mut segments, &text[cursor..whole.start()]);
        segments.push(Segment::Timestamp(timestamp));
        cursor = whole.end();
    }

    push_text(&mut segments, &text[cursor..]);
    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

/// Build the anchor element for a timestamp.
pub fn timestamp_anchor(timestamp: &Timestamp) -> Handle {
    let seconds = timestamp.seconds.to_string();
    let anchor = create_element(
        "a",
        vec![
            ("href", TIMESTAMP_HREF),
            ("data-seconds", seconds.as_str()),
            ("class", TIMESTAMP_LINK_CLASSES),
        ],
    );
    anchor
        .children
        .borrow_mut()
        .push(create_text(timestamp.text()));
    anchor
}

/// Rewrite every eligible text node below `root` into text and timestamp anchors.
///
/// Text inside anchors, inline code, code blocks, scripts and styles is left alone.
/// Groups are matched within a single text node, so a group split by inline markup
/// (`[**1:23**, 2:45]`) keeps its brackets and only its tokens are linked.
pub fn linkify_tree(root: &Handle) -> usize {
    let mut linked = 0;
    let children = root.children.borrow().clone();
    let mut rebuilt = Vec::with_capacity(children.len());
    let mut changed = false;

    for child in children {
        match child.data {
            NodeData::Text { ref contents } => {
                let segments = linkify(&contents.borrow());
                if !segments.iter().any(|s| matches!(s, Segment::Timestamp(_))) {
                    rebuilt.push(child.clone());
                    continue;
                }

                changed = true;
                for segment in segments {
                    match segment {
                        Segment::Text(text) => rebuilt.push(create_text(&text)),
                        Segment::Timestamp(timestamp) => {
                            linked += 1;
                            rebuilt.push(timestamp_anchor(&timestamp));
                        }
                    }
                }
            }
            NodeData::Element { .. } => {
                let skip = tag_name(&child)
                    .map(|tag| SKIPPED_ELEMENTS.contains(&tag.as_str()))
                    .unwrap_or(false);
                if !skip {
                    linked += linkify_tree(&child);
                }
                rebuilt.push(child.clone());
            }
            _ => rebuilt.push(child.clone()),
        }
    }

    if changed {
        *root.children.borrow_mut() = rebuilt;
    }
    linked
}
