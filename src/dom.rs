//! HTML Document Tree Backend
//!
//! Implements [`DocumentTree`] on top of the `dom_query` crate, so the
//! builder and reorder functions can run against a parsed HTML document.
//! A handful of inspection helpers sit alongside for callers and tests.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

pub use tendril::StrTendril;

use crate::tree::DocumentTree;

/// A [`DocumentTree`] view over a borrowed `dom_query` [`Document`].
///
/// The document stays owned by the caller; node handles borrow it.
#[derive(Clone, Copy)]
pub struct HtmlTree<'a> {
    doc: &'a Document,
}

impl<'a> HtmlTree<'a> {
    /// Wrap a document.
    #[inline]
    #[must_use]
    pub const fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    /// First node matching a CSS selector.
    #[must_use]
    pub fn select(&self, selector: &str) -> Option<NodeRef<'a>> {
        self.doc.select_single(selector).nodes().first().cloned()
    }

    /// The document's `<body>` element.
    #[inline]
    #[must_use]
    pub fn body(&self) -> Option<NodeRef<'a>> {
        self.select("body")
    }
}

impl<'a> DocumentTree for HtmlTree<'a> {
    type Node = NodeRef<'a>;

    fn create_element(&self, tag: &str) -> NodeRef<'a> {
        // HTML documents store element names in lowercase.
        self.doc.tree.new_element(&tag.to_ascii_lowercase())
    }

    fn create_text_node(&self, text: &str) -> NodeRef<'a> {
        self.doc.tree.new_text(text)
    }

    fn set_attribute(&self, element: &NodeRef<'a>, name: &str, value: &str) {
        element.set_attr(name, value);
    }

    fn append_child(&self, parent: &NodeRef<'a>, child: &NodeRef<'a>) {
        child.remove_from_parent();
        parent.append_child(child);
    }

    fn insert_before(
        &self,
        _parent: &NodeRef<'a>,
        new_child: &NodeRef<'a>,
        reference: &NodeRef<'a>,
    ) {
        // `reference` already determines the parent in dom_query.
        if new_child.id == reference.id {
            return;
        }
        new_child.remove_from_parent();
        reference.insert_before(new_child);
    }

    fn parent_element(&self, node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
        node.parent().filter(NodeRef::is_element)
    }

    fn previous_element_sibling(&self, node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
        previous_element_sibling(node)
    }

    fn next_element_sibling(&self, node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
        next_element_sibling(node)
    }

    fn first_child(&self, node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
        node.first_child()
    }
}

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tree Navigation ===

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Get previous element sibling (skipping text nodes)
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

/// Element children of `node`, in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

// === Inspection ===

/// Get tag name (lowercase)
#[inline]
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Get all attributes as key-value pairs
///
/// Returns an empty vector for text nodes.
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}
