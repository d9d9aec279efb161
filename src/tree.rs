//! Host Document Tree Interface
//!
//! The builder and reorder functions never own a tree. They delegate every
//! mutation to a caller-supplied implementation of [`DocumentTree`], which
//! mirrors the handful of primitives a browser document exposes.

/// Primitive operations of a live, externally owned document tree.
///
/// `Node` is a cheap handle into the tree. Mutating methods take `&self`;
/// implementations are expected to use interior mutability the way
/// `dom_query` does.
pub trait DocumentTree {
    /// Handle to a node (element or text) in the tree.
    type Node: Clone;

    /// Create a new, unattached element for `tag`.
    fn create_element(&self, tag: &str) -> Self::Node;

    /// Create a new, unattached text node holding `text`.
    fn create_text_node(&self, text: &str) -> Self::Node;

    /// Set `name` to `value` on `element`, overwriting an existing value.
    fn set_attribute(&self, element: &Self::Node, name: &str, value: &str);

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is detached from it first.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Insert `new_child` into `parent` immediately before `reference`.
    ///
    /// `new_child` is detached from its current position first. Inserting a
    /// node before itself leaves the tree unchanged.
    fn insert_before(&self, parent: &Self::Node, new_child: &Self::Node, reference: &Self::Node);

    /// The parent of `node`, if that parent is an element.
    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The closest preceding sibling that is an element.
    fn previous_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The closest following sibling that is an element.
    fn next_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The first child of `node` of any kind, text included.
    fn first_child(&self, node: &Self::Node) -> Option<Self::Node>;
}
