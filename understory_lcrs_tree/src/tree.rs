// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena, linking, removal, traversal, id lookup.

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::TreeError;
use crate::node::{Node, NodeMut, NodeRef};
use crate::types::{ItemId, NodeHandle};

/// Left-child/right-sibling tree owning a generic payload per node.
///
/// All nodes live in one arena owned by the tree; links between nodes are
/// [`NodeHandle`]s into that arena. The root is created with the tree and is
/// never removed.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Option<Node<T>>>, // slots
    generations: Vec<u32>,       // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    root: NodeHandle,
    len: usize,
    max_id: ItemId,
    tag: u32,
}

/// Source of per-tree tags stamped into handles.
static NEXT_TREE_TAG: AtomicU32 = AtomicU32::new(0);

impl<T> core::fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &self.len)
            .field("free_list", &self.free_list.len())
            .field("root", &self.root)
            .field("max_id", &self.max_id)
            .finish_non_exhaustive()
    }
}

/// Pre-order iterator over a subtree.
///
/// Returned by [`Tree::pre_order`]. Walks the left-child/right-sibling links
/// directly, so it needs no stack regardless of the tree's depth.
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    start: NodeHandle,
    next: Option<NodeHandle>,
}

impl<T> core::fmt::Debug for PreOrder<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PreOrder")
            .field("start", &self.start)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl<'a, T> PreOrder<'a, T> {
    fn new(tree: &'a Tree<T>, start: NodeHandle) -> Self {
        Self {
            tree,
            start,
            next: Some(start),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_pre_order(current, self.start);
        Some(self.tree.view(current))
    }
}

impl<T> core::iter::FusedIterator for PreOrder<'_, T> {}

pub(crate) fn rejected(error: TreeError) -> TreeError {
    tracing::debug!(%error, "tree operation rejected");
    error
}

impl<T> Tree<T> {
    /// Create a tree whose root gets the first automatic id, `0`.
    ///
    /// Fails with [`TreeError::EmptyLabel`] if `label` is empty.
    pub fn new(label: impl Into<String>, payload: Option<T>) -> Result<Self, TreeError> {
        Self::with_root_id(0, label, payload)
    }

    /// Create a tree whose root has the caller-chosen `id`.
    ///
    /// Automatic ids handed out afterwards continue from `id + 1`.
    pub fn with_root_id(
        id: ItemId,
        label: impl Into<String>,
        payload: Option<T>,
    ) -> Result<Self, TreeError> {
        let label = label.into();
        if label.is_empty() {
            return Err(rejected(TreeError::EmptyLabel));
        }
        let tag = NEXT_TREE_TAG.fetch_add(1, Ordering::Relaxed);
        let mut tree = Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeHandle::new(0, 1, tag),
            len: 0,
            max_id: id,
            tag,
        };
        tree.root = tree.allocate(id, label, payload);
        Ok(tree)
    }

    /// Handle of the root node.
    pub fn root_handle(&self) -> NodeHandle {
        self.root
    }

    /// View of the root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        self.view(self.root)
    }

    /// Number of live nodes, root included.
    #[allow(
        clippy::len_without_is_empty,
        reason = "A tree always holds its root, so it is never empty."
    )]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Id the next [`Tree::insert`] would assign: one past the largest id present.
    ///
    /// `None` once the largest id is `ItemId::MAX`.
    pub fn next_id(&self) -> Option<ItemId> {
        self.max_id.checked_add(1)
    }

    /// Append a node with the next automatic id as the last child of `parent`
    /// (the root if `None`).
    pub fn insert(
        &mut self,
        parent: Option<NodeHandle>,
        label: impl Into<String>,
        payload: Option<T>,
    ) -> Result<NodeHandle, TreeError> {
        let label = label.into();
        let parent = self.resolve(parent)?;
        if label.is_empty() {
            return Err(rejected(TreeError::EmptyLabel));
        }
        let Some(id) = self.next_id() else {
            return Err(rejected(TreeError::IdSpaceExhausted));
        };
        Ok(self.append_child(parent, id, label, payload))
    }

    /// Append a node with the caller-chosen `id` as the last child of `parent`
    /// (the root if `None`).
    ///
    /// Fails with [`TreeError::DuplicateId`] if a node with `id` already exists.
    /// The uniqueness check scans the whole tree.
    pub fn insert_with_id(
        &mut self,
        parent: Option<NodeHandle>,
        id: ItemId,
        label: impl Into<String>,
        payload: Option<T>,
    ) -> Result<NodeHandle, TreeError> {
        let label = label.into();
        let parent = self.resolve(parent)?;
        if label.is_empty() {
            return Err(rejected(TreeError::EmptyLabel));
        }
        if self.contains_id(id) {
            return Err(rejected(TreeError::DuplicateId(id)));
        }
        Ok(self.append_child(parent, id, label, payload))
    }

    /// Remove a node and its whole subtree.
    ///
    /// The root cannot be removed. Handles to any removed node become stale.
    /// Afterwards the next automatic id is recomputed from the ids that remain,
    /// so it can go down when the largest id was removed.
    pub fn remove(&mut self, handle: NodeHandle) -> Result<(), TreeError> {
        if !self.is_alive(handle) {
            return Err(rejected(TreeError::StaleHandle(handle)));
        }
        if handle == self.root {
            return Err(rejected(TreeError::RootRemoval));
        }

        self.unlink(handle);
        let doomed: Vec<NodeHandle> = PreOrder::new(self, handle).map(|n| n.handle()).collect();
        // Descendants go before their ancestors.
        for h in doomed.into_iter().rev() {
            self.free(h);
        }

        let root_id = self.node(self.root).id;
        self.max_id = self.pre_order_from_root().fold(root_id, |max, n| max.max(n.id()));
        tracing::debug!(max_id = self.max_id, "recomputed largest id after removal");
        Ok(())
    }

    /// Iterate the subtree rooted at `start` (the root if `None`) in pre-order.
    pub fn pre_order(&self, start: Option<NodeHandle>) -> Result<PreOrder<'_, T>, TreeError> {
        let start = self.resolve(start)?;
        Ok(PreOrder::new(self, start))
    }

    /// Visit every node of the subtree rooted at `start` (the root if `None`)
    /// in pre-order: a node first, then each child's subtree, left to right.
    ///
    /// Every node is visited exactly once; there is no early exit.
    pub fn traverse<F>(&self, start: Option<NodeHandle>, mut visit: F) -> Result<(), TreeError>
    where
        F: FnMut(NodeRef<'_, T>),
    {
        for node in self.pre_order(start)? {
            visit(node);
        }
        Ok(())
    }

    /// Like [`Tree::traverse`], handing out mutable views so the visitor can edit
    /// labels and payloads.
    pub fn traverse_mut<F>(
        &mut self,
        start: Option<NodeHandle>,
        mut visit: F,
    ) -> Result<(), TreeError>
    where
        F: FnMut(NodeMut<'_, T>),
    {
        let start = self.resolve(start)?;
        let mut next = Some(start);
        while let Some(current) = next {
            visit(NodeMut::new(self, current));
            // Views cannot rewire links, so the successor is still valid here.
            next = self.next_pre_order(current, start);
        }
        Ok(())
    }

    /// Find the node with `id`, scanning the tree in pre-order.
    pub fn node_by_id(&self, id: ItemId) -> Option<NodeRef<'_, T>> {
        self.pre_order_from_root().find(|n| n.id() == id)
    }

    /// Mutable variant of [`Tree::node_by_id`].
    pub fn node_by_id_mut(&mut self, id: ItemId) -> Option<NodeMut<'_, T>> {
        let handle = self.node_by_id(id)?.handle();
        Some(NodeMut::new(self, handle))
    }

    /// Returns true if a node with `id` exists.
    pub fn contains_id(&self, id: ItemId) -> bool {
        self.node_by_id(id).is_some()
    }

    /// View of the node behind `handle`, if it is live.
    pub fn get(&self, handle: NodeHandle) -> Option<NodeRef<'_, T>> {
        self.is_alive(handle).then(|| self.view(handle))
    }

    /// Mutable view of the node behind `handle`, if it is live.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<NodeMut<'_, T>> {
        if !self.is_alive(handle) {
            return None;
        }
        Some(NodeMut::new(self, handle))
    }

    /// Returns true if `handle` refers to a live node.
    ///
    /// A `NodeHandle` is considered live if it was issued by this tree (or the tree it
    /// was cloned from), its slot exists, and its generation matches the current
    /// generation stored in that slot.
    /// See [`NodeHandle`] docs for the generational semantics.
    pub fn is_alive(&self, handle: NodeHandle) -> bool {
        handle.tree() == self.tag
            && self
                .nodes
                .get(handle.idx())
                .and_then(|n| n.as_ref())
                .is_some_and(|n| n.generation == handle.generation())
    }

    // --- internals ---

    /// Access a node; panics if `handle` is stale.
    pub(crate) fn node(&self, handle: NodeHandle) -> &Node<T> {
        self.nodes[handle.idx()]
            .as_ref()
            .expect("dangling NodeHandle")
    }

    /// Access a node mutably; panics if `handle` is stale.
    pub(crate) fn node_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        self.nodes[handle.idx()]
            .as_mut()
            .expect("dangling NodeHandle")
    }

    pub(crate) fn view(&self, handle: NodeHandle) -> NodeRef<'_, T> {
        NodeRef::new(self, handle, self.node(handle))
    }

    pub(crate) fn pre_order_from_root(&self) -> PreOrder<'_, T> {
        PreOrder::new(self, self.root)
    }

    pub(crate) fn child_count_of(&self, handle: NodeHandle) -> usize {
        let mut count = 0;
        let mut child = self.node(handle).leftmost_child;
        while let Some(c) = child {
            count += 1;
            child = self.node(c).right_sibling;
        }
        count
    }

    pub(crate) fn depth_of(&self, handle: NodeHandle) -> usize {
        let mut depth = 0;
        let mut parent = self.node(handle).parent;
        while let Some(p) = parent {
            depth += 1;
            parent = self.node(p).parent;
        }
        depth
    }

    /// `None` stands for the root; anything else must be live.
    fn resolve(&self, handle: Option<NodeHandle>) -> Result<NodeHandle, TreeError> {
        match handle {
            None => Ok(self.root),
            Some(h) if self.is_alive(h) => Ok(h),
            Some(h) => Err(rejected(TreeError::StaleHandle(h))),
        }
    }

    /// Successor of `current` in a pre-order walk that never leaves `start`'s subtree.
    fn next_pre_order(&self, current: NodeHandle, start: NodeHandle) -> Option<NodeHandle> {
        if let Some(child) = self.node(current).leftmost_child {
            return Some(child);
        }
        let mut node = current;
        loop {
            if node == start {
                return None;
            }
            let n = self.node(node);
            if let Some(sibling) = n.right_sibling {
                return Some(sibling);
            }
            node = n.parent?;
        }
    }

    fn allocate(&mut self, id: ItemId, label: String, payload: Option<T>) -> NodeHandle {
        tracing::trace!(id, label = %label, "creating node");
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            // Slots at `u32::MAX` are never put back on the free list.
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, id, label, payload));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeHandle uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, id, label, payload)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeHandle uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        self.len += 1;
        self.max_id = self.max_id.max(id);
        NodeHandle::new(idx, generation, self.tag)
    }

    fn free(&mut self, handle: NodeHandle) {
        if let Some(node) = self.nodes[handle.idx()].take() {
            tracing::trace!(id = node.id, label = %node.label, "destroying node");
            if self.generations[handle.idx()] < u32::MAX {
                self.free_list.push(handle.idx());
            }
            self.len -= 1;
        }
    }

    /// Link a fresh node after the current last child of `parent`.
    ///
    /// Finding the last child walks the sibling chain, so this costs O(children).
    fn append_child(
        &mut self,
        parent: NodeHandle,
        id: ItemId,
        label: String,
        payload: Option<T>,
    ) -> NodeHandle {
        let last = self
            .node(parent)
            .leftmost_child
            .map(|first| self.last_sibling(first));
        let handle = self.allocate(id, label, payload);
        match last {
            None => self.node_mut(parent).leftmost_child = Some(handle),
            Some(last) => {
                self.node_mut(last).right_sibling = Some(handle);
                self.node_mut(handle).left_sibling = Some(last);
            }
        }
        self.node_mut(handle).parent = Some(parent);
        handle
    }

    fn last_sibling(&self, mut handle: NodeHandle) -> NodeHandle {
        while let Some(next) = self.node(handle).right_sibling {
            handle = next;
        }
        handle
    }

    /// Detach `handle` from its parent and siblings in O(1); its own children stay attached.
    fn unlink(&mut self, handle: NodeHandle) {
        let (parent, left, right) = {
            let n = self.node(handle);
            (n.parent, n.left_sibling, n.right_sibling)
        };
        match (left, parent) {
            (Some(left), _) => self.node_mut(left).right_sibling = right,
            (None, Some(parent)) => self.node_mut(parent).leftmost_child = right,
            (None, None) => {}
        }
        if let Some(right) = right {
            self.node_mut(right).left_sibling = left;
        }
        let n = self.node_mut(handle);
        n.parent = None;
        n.left_sibling = None;
        n.right_sibling = None;
    }
}
