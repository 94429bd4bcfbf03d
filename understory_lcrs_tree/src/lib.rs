// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_lcrs_tree --heading-base-level=0

//! Understory LCRS Tree: an arena-backed, arbitrary-arity tree in left-child/right-sibling form.
//!
//! - Every node carries an id, a non-empty label, and an optional payload of a caller-chosen type.
//! - Nodes are linked to their parent, their leftmost child, and both neighbouring siblings.
//! - Children keep insertion order; this is a hierarchy, not a search tree.
//!
//! ## Ids and handles
//!
//! Two kinds of identifiers coexist:
//!
//! - [`ItemId`]: the caller-visible id, unique within a tree. Choose it yourself with
//!   [`Tree::insert_with_id`], or let [`Tree::insert`] assign one past the largest id present.
//!   Removing the node with the largest id lowers the next automatic id accordingly.
//! - [`NodeHandle`]: a generational arena handle returned by insertion. Handles of removed
//!   nodes are stale; operations taking them fail with [`TreeError::StaleHandle`] rather than
//!   touching a different node.
//!
//! ## API overview
//!
//! - [`Tree::new`] / [`Tree::with_root_id`]: create a tree together with its root.
//! - [`Tree::insert`] / [`Tree::insert_with_id`]: append a node as the last child of a parent.
//! - [`Tree::remove`]: remove a node and its subtree. The root cannot be removed.
//! - [`Tree::traverse`] / [`Tree::traverse_mut`] / [`Tree::pre_order`]: pre-order walks.
//! - [`Tree::node_by_id`] / [`Tree::get`]: lookups by id and by handle.
//! - [`NodeRef`] / [`NodeMut`]: node views. Links can be followed but only the tree rewires them.
//! - [`Tree::outline`]: indented text dump of the whole tree.
//!
//! Lookups by id scan the tree; no index is kept. Walks follow the links directly and never
//! recurse, so arbitrarily deep trees are fine.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_lcrs_tree::Tree;
//!
//! let mut tree = Tree::new("root", None::<()>).unwrap();
//! let a = tree.insert(None, "a", None).unwrap();
//! let _b = tree.insert(None, "b", None).unwrap();
//! let _a1 = tree.insert(Some(a), "a1", None).unwrap();
//!
//! let mut order = Vec::new();
//! tree.traverse(None, |node| order.push(node.label().to_owned())).unwrap();
//! assert_eq!(order, ["root", "a", "a1", "b"]);
//!
//! // Removing `a` takes `a1` with it.
//! tree.remove(a).unwrap();
//! assert_eq!(tree.len(), 2);
//! assert!(tree.node_by_id(3).is_none());
//! ```
//!
//! ### Payloads and explicit ids
//!
//! ```
//! use understory_lcrs_tree::{Tree, TreeError};
//!
//! #[derive(Debug, PartialEq)]
//! struct Mesh {
//!     vertices: usize,
//! }
//!
//! let mut scene = Tree::with_root_id(100, "scene", None).unwrap();
//! let body = scene.insert_with_id(None, 7, "body", Some(Mesh { vertices: 8 })).unwrap();
//! assert_eq!(
//!     scene.insert_with_id(Some(body), 7, "wheel", None),
//!     Err(TreeError::DuplicateId(7)),
//! );
//!
//! scene.traverse_mut(None, |mut node| {
//!     if let Some(mesh) = node.payload_mut() {
//!         mesh.vertices *= 2;
//!     }
//! })
//! .unwrap();
//! assert_eq!(scene.node_by_id(7).unwrap().payload(), Some(&Mesh { vertices: 16 }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod node;
mod outline;
#[cfg(all(test, feature = "std"))]
mod test_util;
mod tree;
mod types;

pub use error::TreeError;
pub use node::{Children, NodeMut, NodeRef};
pub use outline::Outline;
pub use tree::{PreOrder, Tree};
pub use types::{ItemId, NodeHandle};
