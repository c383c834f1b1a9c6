//! Read-only markup tree interface
//!
//! The text exporter walks any tree that can answer these questions, which keeps it
//! independent of the DOM implementation. [`Handle`] from `markup5ever_rcdom` is the
//! implementation used in practice.

use markup5ever_rcdom::{Handle, NodeData};

use crate::dom;

/// Coarse node classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Documents, comments, doctypes, processing instructions
    Other,
}

/// A node of a rendered markup tree
pub trait MarkupNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Lowercase tag name for elements
    fn tag(&self) -> Option<String>;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Children in document order
    fn children(&self) -> Vec<Self>;

    /// Own text for text nodes, `None` otherwise
    fn text(&self) -> Option<String>;

    fn is_element(&self, tag: &str) -> bool {
        self.tag().is_some_and(|t| t == tag)
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Concatenated text of this node and its descendants
    fn text_content(&self) -> String {
        match self.kind() {
            NodeKind::Text => self.text().unwrap_or_default(),
            _ => self.children().iter().map(|c| c.text_content()).collect(),
        }
    }
}

impl MarkupNode for Handle {
    fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag(&self) -> Option<String> {
        dom::tag_name(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        dom::get_attribute(self, name)
    }

    fn children(&self) -> Vec<Self> {
        self.children.borrow().clone()
    }

    fn text(&self) -> Option<String> {
        match self.data {
            NodeData::Text { ref contents } => Some(contents.borrow().to_string()),
            _ => None,
        }
    }
}
