// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by tree operations.

use thiserror::Error;

use crate::types::{ItemId, NodeHandle};

/// Reasons a tree operation was rejected.
///
/// Every fallible operation checks its inputs before touching the tree, so an
/// `Err` always means the tree is exactly as it was before the call.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A node label was empty.
    #[error("node label must not be empty")]
    EmptyLabel,

    /// The id is already used by another node of the tree.
    #[error("id {0} already exists in the tree")]
    DuplicateId(ItemId),

    /// The root cannot be removed; it lives as long as the tree.
    #[error("the root node cannot be removed")]
    RootRemoval,

    /// The handle refers to a node that has been removed.
    #[error("handle {0:?} does not refer to a live node")]
    StaleHandle(NodeHandle),

    /// The largest id in the tree is `ItemId::MAX`, so no next id exists.
    #[error("no automatic id left after {max}", max = ItemId::MAX)]
    IdSpaceExhausted,
}
