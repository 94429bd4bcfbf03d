// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node storage and the read-only / mutable views handed out by the tree.
//!
//! A node is linked into the tree with four handles:
//!
//! - `parent`: the containing node, `None` for the root.
//! - `leftmost_child`: the first child in insertion order.
//! - `right_sibling` / `left_sibling`: the doubly-linked chain of nodes sharing a parent.
//!
//! Only the tree rewires these links. Views expose them for navigation, and
//! [`NodeMut`] allows editing node content (label and payload) but never links.

use alloc::string::String;

use crate::error::TreeError;
use crate::tree::{Tree, rejected};
use crate::types::{ItemId, NodeHandle};

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) generation: u32,
    pub(crate) id: ItemId,
    pub(crate) label: String,
    pub(crate) payload: Option<T>,
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) leftmost_child: Option<NodeHandle>,
    pub(crate) right_sibling: Option<NodeHandle>,
    pub(crate) left_sibling: Option<NodeHandle>,
}

impl<T> Node<T> {
    pub(crate) fn new(generation: u32, id: ItemId, label: String, payload: Option<T>) -> Self {
        Self {
            generation,
            id,
            label,
            payload,
            parent: None,
            leftmost_child: None,
            right_sibling: None,
            left_sibling: None,
        }
    }
}

/// Read-only view of a live node.
///
/// Obtained from [`Tree::root`], [`Tree::get`], [`Tree::node_by_id`], or while
/// walking the tree. Navigation accessors return further views, so a caller can
/// move around the tree without going back through handles.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    handle: NodeHandle,
    node: &'a Node<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> core::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("handle", &self.handle)
            .field("id", &self.node.id)
            .field("label", &self.node.label)
            .finish_non_exhaustive()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, handle: NodeHandle, node: &'a Node<T>) -> Self {
        Self { tree, handle, node }
    }

    /// Handle of this node.
    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    /// Id of this node.
    pub fn id(&self) -> ItemId {
        self.node.id
    }

    /// Label given at creation (or by [`NodeMut::set_label`]).
    pub fn label(&self) -> &'a str {
        &self.node.label
    }

    /// Payload attached to this node, if any.
    pub fn payload(&self) -> Option<&'a T> {
        self.node.payload.as_ref()
    }

    /// Containing node, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node.parent.map(|h| self.tree.view(h))
    }

    /// First child in insertion order.
    pub fn leftmost_child(&self) -> Option<Self> {
        self.node.leftmost_child.map(|h| self.tree.view(h))
    }

    /// Next sibling in insertion order.
    pub fn right_sibling(&self) -> Option<Self> {
        self.node.right_sibling.map(|h| self.tree.view(h))
    }

    /// Previous sibling in insertion order.
    pub fn left_sibling(&self) -> Option<Self> {
        self.node.left_sibling.map(|h| self.tree.view(h))
    }

    /// Returns true if this is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.node.parent.is_none()
    }

    /// Iterate the direct children, left to right.
    pub fn children(&self) -> Children<'a, T> {
        Children {
            tree: self.tree,
            next: self.node.leftmost_child,
        }
    }

    /// Number of direct children.
    ///
    /// Walks the sibling chain, so this is linear in the number of children.
    pub fn child_count(&self) -> usize {
        self.tree.child_count_of(self.handle)
    }

    /// Number of edges between this node and the root. The root has depth `0`.
    pub fn depth(&self) -> usize {
        self.tree.depth_of(self.handle)
    }
}

/// Iterator over the direct children of a node, in insertion order.
///
/// Returned by [`NodeRef::children`].
pub struct Children<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeHandle>,
}

impl<T> core::fmt::Debug for Children<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Children")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.tree.view(self.next?);
        self.next = view.node.right_sibling;
        Some(view)
    }
}

impl<T> core::iter::FusedIterator for Children<'_, T> {}

/// Mutable view of a live node.
///
/// Content (label and payload) can be edited through this view; the links stay
/// under the tree's control, which is why they are only exposed as handles.
pub struct NodeMut<'a, T> {
    tree: &'a mut Tree<T>,
    handle: NodeHandle,
}

impl<T> core::fmt::Debug for NodeMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let node = self.node();
        f.debug_struct("NodeMut")
            .field("handle", &self.handle)
            .field("id", &node.id)
            .field("label", &node.label)
            .finish_non_exhaustive()
    }
}

impl<'a, T> NodeMut<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>, handle: NodeHandle) -> Self {
        Self { tree, handle }
    }

    fn node(&self) -> &Node<T> {
        self.tree.node(self.handle)
    }

    fn node_mut(&mut self) -> &mut Node<T> {
        self.tree.node_mut(self.handle)
    }

    /// Read-only view of the same node.
    pub fn view(&self) -> NodeRef<'_, T> {
        self.tree.view(self.handle)
    }

    /// Handle of this node.
    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    /// Id of this node.
    pub fn id(&self) -> ItemId {
        self.node().id
    }

    /// Current label.
    pub fn label(&self) -> &str {
        &self.node().label
    }

    /// Replace the label.
    ///
    /// Returns [`TreeError::EmptyLabel`] and leaves the label untouched if `label` is empty.
    pub fn set_label(&mut self, label: impl Into<String>) -> Result<(), TreeError> {
        let label = label.into();
        if label.is_empty() {
            return Err(rejected(TreeError::EmptyLabel));
        }
        self.node_mut().label = label;
        Ok(())
    }

    /// Payload attached to this node, if any.
    pub fn payload(&self) -> Option<&T> {
        self.node().payload.as_ref()
    }

    /// Mutable access to the payload, if any.
    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.node_mut().payload.as_mut()
    }

    /// Attach `payload`, returning the one it replaces.
    pub fn set_payload(&mut self, payload: Option<T>) -> Option<T> {
        core::mem::replace(&mut self.node_mut().payload, payload)
    }

    /// Detach and return the payload.
    pub fn take_payload(&mut self) -> Option<T> {
        self.node_mut().payload.take()
    }

    /// Handle of the containing node.
    pub fn parent(&self) -> Option<NodeHandle> {
        self.node().parent
    }

    /// Handle of the first child.
    pub fn leftmost_child(&self) -> Option<NodeHandle> {
        self.node().leftmost_child
    }

    /// Handle of the next sibling.
    pub fn right_sibling(&self) -> Option<NodeHandle> {
        self.node().right_sibling
    }

    /// Handle of the previous sibling.
    pub fn left_sibling(&self) -> Option<NodeHandle> {
        self.node().left_sibling
    }

    /// Returns true if this is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.tree.child_count_of(self.handle)
    }

    /// Distance from the root.
    pub fn depth(&self) -> usize {
        self.tree.depth_of(self.handle)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Tree, TreeError};
    use alloc::vec::Vec;

    #[test]
    fn views_navigate_all_four_links() {
        let mut tree = Tree::<()>::new("root", None).unwrap();
        let a = tree.insert(None, "a", None).unwrap();
        let b = tree.insert(None, "b", None).unwrap();
        let a1 = tree.insert(Some(a), "a1", None).unwrap();

        let root = tree.root();
        assert!(root.is_root());
        assert!(root.parent().is_none());
        assert!(root.right_sibling().is_none() && root.left_sibling().is_none());

        let first = root.leftmost_child().unwrap();
        assert_eq!(first.handle(), a);
        assert_eq!(first.right_sibling().map(|n| n.handle()), Some(b));
        assert_eq!(
            first.right_sibling().and_then(|n| n.left_sibling()).map(|n| n.handle()),
            Some(a)
        );
        assert_eq!(first.leftmost_child().map(|n| n.handle()), Some(a1));
        assert_eq!(
            tree.get(a1).unwrap().parent().map(|n| n.label()),
            Some("a")
        );
    }

    #[test]
    fn depth_and_child_count_on_a_chain() {
        let mut tree = Tree::<()>::new("r", None).unwrap();
        let a = tree.insert(None, "a", None).unwrap();
        let b = tree.insert(Some(a), "b", None).unwrap();
        let c = tree.insert(Some(b), "c", None).unwrap();

        let depths: Vec<usize> = [tree.root_handle(), a, b, c]
            .iter()
            .map(|h| tree.get(*h).unwrap().depth())
            .collect();
        assert_eq!(depths, [0, 1, 2, 3]);
        assert_eq!(tree.root().child_count(), 1);
        assert_eq!(tree.get(c).unwrap().child_count(), 0);
    }

    #[test]
    fn children_iterates_in_insertion_order() {
        let mut tree = Tree::<()>::new("r", None).unwrap();
        for label in ["x", "y", "z"] {
            tree.insert(None, label, None).unwrap();
        }
        let labels: Vec<&str> = tree.root().children().map(|n| n.label()).collect();
        assert_eq!(labels, ["x", "y", "z"]);
    }

    #[test]
    fn node_mut_edits_content_only() {
        let mut tree = Tree::new("r", Some(1_u32)).unwrap();
        let a = tree.insert(None, "a", Some(10)).unwrap();

        let mut node = tree.get_mut(a).unwrap();
        assert_eq!(node.set_label(""), Err(TreeError::EmptyLabel));
        assert_eq!(node.label(), "a", "rejected label must not be applied");
        node.set_label("renamed").unwrap();
        *node.payload_mut().unwrap() += 5;
        assert_eq!(node.set_payload(Some(99)), Some(15));
        assert_eq!(node.take_payload(), Some(99));
        assert_eq!(node.parent(), Some(tree.root_handle()));

        let view = tree.get(a).unwrap();
        assert_eq!(view.label(), "renamed");
        assert_eq!(view.payload(), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn rejected_label_edit_emits_debug_event() {
        use crate::test_util::count_debug_events;

        let mut tree = Tree::<()>::new("r", None).unwrap();
        let a = tree.insert(None, "a", None).unwrap();
        let events = count_debug_events(|| {
            let mut node = tree.get_mut(a).unwrap();
            assert_eq!(node.set_label(""), Err(TreeError::EmptyLabel));
        });
        assert_eq!(events, 1, "rejections are logged like other tree operations");
    }
}
