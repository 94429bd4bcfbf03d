// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public identifier types: caller-visible item ids and generational node handles.

/// Caller-visible identifier of a node.
///
/// Ids are unique within one [`Tree`](crate::Tree) and never change after the
/// node is created. They are either supplied by the caller
/// ([`Tree::insert_with_id`](crate::Tree::insert_with_id)) or derived from the
/// largest id present ([`Tree::insert`](crate::Tree::insert)).
pub type ItemId = u32;

/// Handle of a node in the tree's arena.
///
/// This is a small, copyable handle that stays stable while the node is alive but becomes
/// invalid once the node (or one of its ancestors) is removed.
/// It consists of a slot index, a generation counter, and the tag of the owning tree.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeHandle` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeHandle`.
///
/// ### Liveness
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeHandle` still refers to a live node.
/// Stale handles never alias a different live node because the generation must match,
/// and every operation taking a handle reports [`TreeError::StaleHandle`](crate::TreeError::StaleHandle)
/// for them.
///
/// ### Notes
///
/// - Handles are not ids: a handle says nothing about the [`ItemId`] of the node it refers to.
/// - Each tree stamps its handles with its own tag, so a handle from one tree is stale in
///   any other. A [`Clone`] of a tree keeps the tag and accepts its source's handles.
/// - A slot whose generation reaches `u32::MAX` is retired instead of reused, so generations
///   never repeat within a slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeHandle(pub(crate) u32, pub(crate) u32, pub(crate) u32);

impl NodeHandle {
    pub(crate) const fn new(idx: u32, generation: u32, tree: u32) -> Self {
        Self(idx, generation, tree)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }

    pub(crate) const fn tree(self) -> u32 {
        self.2
    }
}
