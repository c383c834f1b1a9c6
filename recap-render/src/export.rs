//! Plain-text export (rendered markup → markdown-like text)
//!
//! Reconstructs an indentation-correct document from a rendered summary:
//!
//! - headings become `#` markers, paragraphs are separated by blank lines
//! - list items become `- ` / `1. ` lines indented by their nesting depth
//! - emphasis and inline code keep their markdown markers
//! - code blocks are fenced with triple backticks around the decoded source
//! - timestamp anchors become `[1:23]`, other anchors `[text](href)`
//!
//! The walk only relies on [`MarkupNode`], and list depth travels down the
//! recursion as an explicit [`ListContext`] rather than being recomputed.

use regex::Regex;
use std::sync::LazyLock;

use crate::dom::Fragment;
use crate::timestamps::TIMESTAMP_LINK_CLASS;
use crate::tree::{MarkupNode, NodeKind};

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));

/// Options for text export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Spaces per list nesting level
    pub indent_width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions { indent_width: 2 }
    }
}

/// Position inside nested lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListContext {
    /// Number of `ul`/`ol` ancestors
    pub lists: usize,
    /// Whether the innermost list is ordered
    pub ordered: bool,
}

impl ListContext {
    /// Depth of an item in the innermost list (0 for top-level items).
    pub fn depth(&self) -> usize {
        self.lists.saturating_sub(1)
    }

    fn enter(self, ordered: bool) -> Self {
        ListContext {
            lists: self.lists + 1,
            ordered,
        }
    }
}

/// Export a rendered tree with default options.
pub fn export_as_text<N: MarkupNode>(root: &N) -> String {
    export_with_options(root, &ExportOptions::default())
}

/// Export a rendered tree.
pub fn export_with_options<N: MarkupNode>(root: &N, options: &ExportOptions) -> String {
    let exporter = TextExporter { options };
    let raw = exporter.node(root, ListContext::default());
    EXCESS_NEWLINES.replace_all(&raw, "\n\n").trim().to_string()
}

/// Parse rendered markup and export it.
pub fn export_markup(markup: &str) -> String {
    export_markup_with_options(markup, &ExportOptions::default())
}

pub fn export_markup_with_options(markup: &str, options: &ExportOptions) -> String {
    let fragment = Fragment::parse(markup);
    export_with_options(&fragment.body, options)
}

struct TextExporter<'a> {
    options: &'a ExportOptions,
}

impl TextExporter<'_> {
    fn node<N: MarkupNode>(&self, node: &N, ctx: ListContext) -> String {
        match node.kind() {
            NodeKind::Text => node.text().unwrap_or_default(),
            // Documents recurse; comments and doctypes have no children.
            NodeKind::Other => self.children(node, ctx),
            NodeKind::Element => self.element(node, ctx),
        }
    }

    fn element<N: MarkupNode>(&self, node: &N, ctx: ListContext) -> String {
        let tag = node.tag().unwrap_or_default();
        match tag.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse::<usize>().unwrap_or(1);
                let marker = "#".repeat(level);
                let content = self.children(node, ctx);
                let content = content.trim();
                if content.is_empty() {
                    format!("{marker}\n\n")
                } else {
                    format!("{marker} {content}\n\n")
                }
            }
            "p" => {
                let content = self.children(node, ctx);
                let content = content.trim();
                if content.is_empty() {
                    String::new()
                } else {
                    format!("{content}\n\n")
                }
            }
            "br" => "\n".to_string(),
            "ul" | "ol" => self.list(node, ctx.enter(tag == "ol"), ctx.lists == 0),
            "li" => self.item(node, ctx),
            "strong" | "b" => format!("**{}**", self.children(node, ctx)),
            "em" | "i" => format!("*{}*", self.children(node, ctx)),
            "code" => format!("`{}`", node.text_content()),
            "pre" => {
                let source = node.text_content();
                format!("```\n{}\n```\n\n", source.trim_end_matches('\n'))
            }
            "a" => self.anchor(node, ctx),
            "details" => self.details(node, ctx),
            "script" | "style" => String::new(),
            _ => self.children(node, ctx),
        }
    }

    /// Concatenate children. The newline the base renderer places after a `<br>`
    /// is dropped so the break is not doubled.
    fn children<N: MarkupNode>(&self, node: &N, ctx: ListContext) -> String {
        let mut out = String::new();
        let mut after_break = false;

        for child in node.children() {
            let mut piece = self.node(&child, ctx);
            if after_break && child.kind() == NodeKind::Text && piece.starts_with('\n') {
                piece.remove(0);
            }
            after_break = child.is_element("br");
            out.push_str(&piece);
        }
        out
    }

    fn list<N: MarkupNode>(&self, node: &N, ctx: ListContext, outermost: bool) -> String {
        let mut out = String::new();
        for child in node.children() {
            match child.kind() {
                NodeKind::Element => out.push_str(&self.node(&child, ctx)),
                NodeKind::Text => {
                    let text = child.text().unwrap_or_default();
                    if !text.trim().is_empty() {
                        out.push_str(text.trim());
                        out.push('\n');
                    }
                }
                NodeKind::Other => {}
            }
        }
        if outermost {
            out.push('\n');
        }
        out
    }

    fn item<N: MarkupNode>(&self, node: &N, ctx: ListContext) -> String {
        let indent = " ".repeat(self.options.indent_width * ctx.depth());
        let marker = if ctx.ordered { "1. " } else { "- " };

        let mut direct = String::new();
        let mut nested = String::new();
        let mut after_break = false;

        for child in node.children() {
            if child.is_element("ul") || child.is_element("ol") {
                nested.push_str(&self.node(&child, ctx));
                after_break = false;
                continue;
            }
            let mut piece = self.node(&child, ctx);
            if after_break && child.kind() == NodeKind::Text && piece.starts_with('\n') {
                piece.remove(0);
            }
            after_break = child.is_element("br");
            direct.push_str(&piece);
        }

        let mut out = String::new();
        let direct = direct.trim();
        if !direct.is_empty() {
            out.push_str(&indent);
            out.push_str(marker);
            out.push_str(direct);
            out.push('\n');
        }
        out.push_str(&nested);
        out
    }

    fn anchor<N: MarkupNode>(&self, node: &N, ctx: ListContext) -> String {
        let text = self.children(node, ctx);
        if node.has_class(TIMESTAMP_LINK_CLASS) {
            return format!("[{text}]");
        }
        match node.attribute("href") {
            Some(href) => format!("[{text}]({href})"),
            None => text,
        }
    }

    fn details<N: MarkupNode>(&self, node: &N, ctx: ListContext) -> String {
        let mut summary = String::new();
        let mut body = String::new();

        for child in node.children() {
            if child.is_element("summary") {
                summary.push_str(&self.children(&child, ctx));
            } else {
                body.push_str(&self.node(&child, ctx));
            }
        }

        let summary = summary.trim();
        let mut out = String::new();
        if !summary.is_empty() {
            out.push_str(&format!("**{summary}**\n"));
        }
        out.push_str(&body);
        out.push_str("\n\n");
        out
    }
}
