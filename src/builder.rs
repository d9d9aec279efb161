//! Element Builder
//!
//! Creates text nodes and elements, applies attribute maps, and appends
//! string-or-node content. Nothing here can fail: every call is a direct
//! delegation to the injected [`DocumentTree`].

use crate::content::{Attributes, Content};
use crate::tree::DocumentTree;

/// Create a text node whose content is `text`.
///
/// Accepts any string, the empty string included.
#[inline]
#[must_use]
pub fn create_text_node<T: DocumentTree>(tree: &T, text: &str) -> T::Node {
    tree.create_text_node(text)
}

/// Set every entry of `attrs` on `element`, overwriting existing values.
pub fn apply_attributes<T: DocumentTree>(tree: &T, element: &T::Node, attrs: &Attributes) {
    for (name, value) in attrs {
        tree.set_attribute(element, name, value);
    }
}

/// Create an unattached element for `tag`.
///
/// `attrs` are applied when given. `content` is appended when given: text is
/// wrapped in a new text node, a node is appended directly (which detaches it
/// from its previous parent). Empty text counts as no content.
#[must_use]
pub fn create_element<T: DocumentTree>(
    tree: &T,
    tag: &str,
    attrs: Option<&Attributes>,
    content: Option<Content<T::Node>>,
) -> T::Node {
    let element = tree.create_element(tag);
    if let Some(attrs) = attrs {
        apply_attributes(tree, &element, attrs);
    }
    if let Some(content) = content.filter(|c| c.as_text() != Some("")) {
        append_content(tree, &element, content);
    }
    element
}

/// Create an element for `tag` holding `children` in order.
///
/// When `parent` is given the new element becomes its last child. The new
/// element is returned either way.
pub fn create_container<T, I>(
    tree: &T,
    tag: &str,
    attrs: Option<&Attributes>,
    children: I,
    parent: Option<&T::Node>,
) -> T::Node
where
    T: DocumentTree,
    I: IntoIterator<Item = Content<T::Node>>,
{
    let element = tree.create_element(tag);
    if let Some(attrs) = attrs {
        apply_attributes(tree, &element, attrs);
    }
    for child in children {
        append_content(tree, &element, child);
    }
    if let Some(parent) = parent {
        tree.append_child(parent, &element);
    }
    element
}

/// Append one piece of content, converting text to a text node.
fn append_content<T: DocumentTree>(tree: &T, parent: &T::Node, content: Content<T::Node>) {
    match content {
        Content::Text(text) => {
            let node = tree.create_text_node(&text);
            tree.append_child(parent, &node);
        }
        Content::Node(node) => tree.append_child(parent, &node),
    }
}
