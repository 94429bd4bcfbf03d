// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indented text rendering of a tree, one line per node.

use core::fmt;

use crate::node::NodeRef;
use crate::tree::Tree;

/// [`Display`](fmt::Display) adapter returned by [`Tree::outline`].
///
/// Each node is printed in pre-order, prefixed with `--` per level of depth,
/// followed by its label, id, and the labels of its four neighbours (`-` when
/// a link is empty):
///
/// ```text
/// root [0] parent: -, left child: a, right sibling: -, left sibling: -
/// --a [1] parent: root, left child: -, right sibling: b, left sibling: -
/// --b [2] parent: root, left child: -, right sibling: -, left sibling: a
/// ```
pub struct Outline<'a, T> {
    tree: &'a Tree<T>,
}

impl<T> fmt::Debug for Outline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outline").finish_non_exhaustive()
    }
}

fn label_of<T>(node: Option<NodeRef<'_, T>>) -> &str {
    node.map_or("-", |n| n.label())
}

impl<T> fmt::Display for Outline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.tree.pre_order_from_root() {
            for _ in 0..node.depth() {
                f.write_str("--")?;
            }
            writeln!(
                f,
                "{} [{}] parent: {}, left child: {}, right sibling: {}, left sibling: {}",
                node.label(),
                node.id(),
                label_of(node.parent()),
                label_of(node.leftmost_child()),
                label_of(node.right_sibling()),
                label_of(node.left_sibling()),
            )?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Render the tree as indented text; see [`Outline`].
    pub fn outline(&self) -> Outline<'_, T> {
        Outline { tree: self }
    }
}
