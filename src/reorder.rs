//! Sibling Reordering
//!
//! Moves an element within its current parent. Every operation is a silent
//! no-op when its precondition (a parent, a qualifying sibling) is missing;
//! callers that need confirmation must inspect the tree afterwards.

use log::trace;

use crate::tree::DocumentTree;

/// Move `element` one position earlier, before its previous element sibling.
pub fn move_before<T: DocumentTree>(tree: &T, element: &T::Node) {
    let Some(parent) = tree.parent_element(element) else {
        trace!("move_before: element has no parent");
        return;
    };
    let Some(previous) = tree.previous_element_sibling(element) else {
        trace!("move_before: element has no previous element sibling");
        return;
    };
    tree.insert_before(&parent, element, &previous);
}

/// Move `element` one position later by moving its next element sibling
/// in front of it.
pub fn move_after<T: DocumentTree>(tree: &T, element: &T::Node) {
    let Some(parent) = tree.parent_element(element) else {
        trace!("move_after: element has no parent");
        return;
    };
    let Some(next) = tree.next_element_sibling(element) else {
        trace!("move_after: element has no next element sibling");
        return;
    };
    tree.insert_before(&parent, &next, element);
}

/// Move `element` in front of its parent's first child.
pub fn move_to_first<T: DocumentTree>(tree: &T, element: &T::Node) {
    let Some(parent) = tree.parent_element(element) else {
        trace!("move_to_first: element has no parent");
        return;
    };
    // A parent of `element` always has a first child, possibly `element` itself.
    if let Some(first) = tree.first_child(&parent) {
        tree.insert_before(&parent, element, &first);
    }
}

/// Move `element` to the end of its parent's children.
pub fn move_to_last<T: DocumentTree>(tree: &T, element: &T::Node) {
    let Some(parent) = tree.parent_element(element) else {
        trace!("move_to_last: element has no parent");
        return;
    };
    tree.append_child(&parent, element);
}

/// Alias of [`move_to_first`].
#[inline]
pub fn to_first_child<T: DocumentTree>(tree: &T, element: &T::Node) {
    move_to_first(tree, element);
}

/// Alias of [`move_to_last`].
#[inline]
pub fn to_last_child<T: DocumentTree>(tree: &T, element: &T::Node) {
    move_to_last(tree, element);
}
