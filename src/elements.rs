//! The `Elements` namespace: every builder and reorder helper bound to one
//! injected tree.

use crate::builder;
use crate::content::{Attributes, Content};
use crate::reorder;
use crate::tree::DocumentTree;

/// All element helpers bound to one [`DocumentTree`].
///
/// # Example
///
/// ```rust
/// use dom_elements::dom::{element_children, parse, HtmlTree};
/// use dom_elements::{Content, Elements};
///
/// let doc = parse("<ul id=\"list\"></ul>");
/// let tree = HtmlTree::new(&doc);
/// let els = Elements::new(&tree);
///
/// let list = tree.select("#list").unwrap();
/// let a = els.create_container("li", None, [Content::from("a")], Some(&list));
/// let _b = els.create_container("li", None, [Content::from("b")], Some(&list));
/// els.move_to_last(&a);
///
/// assert_eq!(tree.select("#list").unwrap().text().to_string(), "ba");
/// assert_eq!(element_children(&list).len(), 2);
/// ```
#[derive(Debug)]
pub struct Elements<'t, T> {
    tree: &'t T,
}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Elements<'_, T> {}

impl<'t, T: DocumentTree> Elements<'t, T> {
    /// Bind the helpers to `tree`.
    #[inline]
    #[must_use]
    pub const fn new(tree: &'t T) -> Self {
        Self { tree }
    }

    /// See [`builder::create_text_node`].
    #[must_use]
    pub fn create_text_node(&self, text: &str) -> T::Node {
        builder::create_text_node(self.tree, text)
    }

    /// See [`builder::apply_attributes`].
    pub fn apply_attributes(&self, element: &T::Node, attrs: &Attributes) {
        builder::apply_attributes(self.tree, element, attrs);
    }

    /// See [`builder::create_element`].
    #[must_use]
    pub fn create_element(
        &self,
        tag: &str,
        attrs: Option<&Attributes>,
        content: Option<Content<T::Node>>,
    ) -> T::Node {
        builder::create_element(self.tree, tag, attrs, content)
    }

    /// See [`builder::create_container`].
    pub fn create_container<I>(
        &self,
        tag: &str,
        attrs: Option<&Attributes>,
        children: I,
        parent: Option<&T::Node>,
    ) -> T::Node
    where
        I: IntoIterator<Item = Content<T::Node>>,
    {
        builder::create_container(self.tree, tag, attrs, children, parent)
    }

    /// See [`reorder::move_before`].
    pub fn move_before(&self, element: &T::Node) {
        reorder::move_before(self.tree, element);
    }

    /// See [`reorder::move_after`].
    pub fn move_after(&self, element: &T::Node) {
        reorder::move_after(self.tree, element);
    }

    /// See [`reorder::move_to_first`].
    pub fn move_to_first(&self, element: &T::Node) {
        reorder::move_to_first(self.tree, element);
    }

    /// See [`reorder::move_to_last`].
    pub fn move_to_last(&self, element: &T::Node) {
        reorder::move_to_last(self.tree, element);
    }

    /// See [`reorder::to_first_child`].
    pub fn to_first_child(&self, element: &T::Node) {
        reorder::to_first_child(self.tree, element);
    }

    /// See [`reorder::to_last_child`].
    pub fn to_last_child(&self, element: &T::Node) {
        reorder::to_last_child(self.tree, element);
    }
}
