// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! LCRS tree basics.
//!
//! Build a small three-level tree, print it, look a node up by id, and remove
//! two subtrees.
//!
//! Run:
//! - `cargo run -p understory_lcrs_tree_demos --example lcrs_tree_basics`
//! - `RUST_LOG=trace cargo run -p understory_lcrs_tree_demos --example lcrs_tree_basics`
//!   to also see node creation and destruction events.

use tracing_subscriber::{EnvFilter, fmt};
use understory_lcrs_tree::{Tree, TreeError};

fn main() -> Result<(), TreeError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    // Build a small tree
    let mut tree = Tree::<()>::new("0", None)?;
    let n01 = tree.insert(None, "0-1", None)?;
    let n02 = tree.insert(None, "0-2", None)?;
    let n03 = tree.insert(None, "0-3", None)?;
    let n11 = tree.insert(Some(n01), "1-1", None)?;
    tree.insert(Some(n01), "1-2", None)?;
    tree.insert(Some(n02), "2-1", None)?;
    tree.insert(Some(n02), "2-2", None)?;
    tree.insert(Some(n03), "3-1", None)?;
    tree.insert(Some(n03), "3-2", None)?;
    let n33 = tree.insert(Some(n03), "3-3", None)?;
    tree.insert(Some(n11), "1-1-1", None)?;
    tree.insert(Some(n11), "1-1-2", None)?;
    tracing::info!(nodes = tree.len(), "built sample tree");
    print!("{}", tree.outline());

    match tree.node_by_id(11) {
        Some(node) => println!("found node with id 11: {}", node.label()),
        None => println!("node with id 11 not found"),
    }

    tree.remove(n11)?;
    println!("--- after removing 1-1 ---");
    print!("{}", tree.outline());

    tree.remove(n33)?;
    println!("--- after removing 3-3 ---");
    print!("{}", tree.outline());

    // The root stays put.
    assert_eq!(tree.remove(tree.root_handle()), Err(TreeError::RootRemoval));
    println!("next automatic id: {:?}", tree.next_id());
    Ok(())
}
