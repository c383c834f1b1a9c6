//! DOM plumbing over `html5ever` + `markup5ever_rcdom`.
//!
//! The forward renderer parses the base markdown output into an `RcDom` once and runs
//! its post-processing passes (highlighting, timestamps, link hardening) as tree
//! rewrites. The inverse converter reads the same tree shape.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_document, Attribute, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::RenderError;

/// A parsed markup fragment: the owning DOM plus its `<body>` element.
pub struct Fragment {
    // Keeps the arena of nodes alive for as long as `body` is used.
    dom: RcDom,
    pub body: Handle,
}

impl Fragment {
    /// Parse a markup fragment (not a full document).
    pub fn parse(markup: &str) -> Self {
        let wrapped = format!("<!DOCTYPE html><html><head></head><body>{markup}</body></html>");
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .one(wrapped.as_bytes());

        let body = find_first_element(&dom.document, "body")
            .unwrap_or_else(|| create_element("body", vec![]));

        Fragment { dom, body }
    }

    /// The document node the fragment was parsed into.
    pub fn document(&self) -> &Handle {
        &self.dom.document
    }

    /// Top-level nodes of the fragment.
    pub fn nodes(&self) -> Vec<Handle> {
        self.body.children.borrow().clone()
    }

    /// Detach and return the top-level nodes.
    ///
    /// Dropping an `RcDom` clears the children of every node still attached to it,
    /// so nodes that outlive the fragment must be taken out this way.
    pub fn into_nodes(self) -> Vec<Handle> {
        std::mem::take(&mut *self.body.children.borrow_mut())
    }

    /// Serialize the fragment back to markup.
    pub fn to_markup(&self) -> Result<String, RenderError> {
        serialize_children(&self.body)
    }
}

/// Serialize the children of `parent` (not `parent` itself).
pub fn serialize_children(parent: &Handle) -> Result<String, RenderError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in parent.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| RenderError::Serialization(format!("HTML serialization failed: {e}")))?;
    }

    String::from_utf8(output)
        .map_err(|e| RenderError::Serialization(format!("UTF-8 conversion failed: {e}")))
}

/// Create an HTML element with attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Local tag name of an element node, `None` for anything else.
pub fn tag_name(handle: &Handle) -> Option<String> {
    match handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref().to_ascii_lowercase()),
        _ => None,
    }
}

pub fn is_element(handle: &Handle, tag: &str) -> bool {
    matches!(handle.data, NodeData::Element { ref name, .. } if name.local.as_ref().eq_ignore_ascii_case(tag))
}

pub fn get_attribute(handle: &Handle, attr_name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == attr_name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

/// Set an attribute, replacing the value in place or appending it.
pub fn set_attribute(handle: &Handle, attr_name: &str, value: &str) {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        let mut attrs_mut = attrs.borrow_mut();

        for attr in attrs_mut.iter_mut() {
            if attr.name.local.as_ref() == attr_name {
                attr.value = value.into();
                return;
            }
        }

        attrs_mut.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from(attr_name)),
            value: value.into(),
        });
    }
}

pub fn has_class(handle: &Handle, class: &str) -> bool {
    get_attribute(handle, "class")
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

pub fn find_first_element(handle: &Handle, name: &str) -> Option<Handle> {
    if is_element(handle, name) {
        return Some(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }

    None
}

pub fn find_elements_by_name(handle: &Handle, name: &str) -> Vec<Handle> {
    let mut results = Vec::new();
    find_elements_recursive(handle, name, &mut results);
    results
}

fn find_elements_recursive(handle: &Handle, name: &str, results: &mut Vec<Handle>) {
    if is_element(handle, name) {
        results.push(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        find_elements_recursive(child, name, results);
    }
}
