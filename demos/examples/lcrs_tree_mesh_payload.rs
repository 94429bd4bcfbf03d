// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! LCRS tree with payloads.
//!
//! Attach a small mesh record to scene nodes, scale every mesh in one mutable
//! walk, and sum vertex counts per subtree.
//!
//! Run:
//! - `cargo run -p understory_lcrs_tree_demos --example lcrs_tree_mesh_payload`

use tracing_subscriber::{EnvFilter, fmt};
use understory_lcrs_tree::{NodeHandle, Tree, TreeError};

#[derive(Clone, Debug)]
struct Mesh {
    name: String,
    vertices: Vec<[f32; 3]>,
}

impl Mesh {
    fn quad(name: &str, size: f32) -> Self {
        Self {
            name: name.to_owned(),
            vertices: vec![
                [0.0, 0.0, 0.0],
                [size, 0.0, 0.0],
                [size, size, 0.0],
                [0.0, size, 0.0],
            ],
        }
    }

    fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            for c in v.iter_mut() {
                *c *= factor;
            }
        }
    }
}

fn vertex_count(tree: &Tree<Mesh>, start: NodeHandle) -> Result<usize, TreeError> {
    let mut total = 0;
    tree.traverse(Some(start), |node| {
        total += node.payload().map_or(0, |m| m.vertices.len());
    })?;
    Ok(total)
}

fn main() -> Result<(), TreeError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let mut scene = Tree::with_root_id(1000, "scene", None)?;
    let car = scene.insert_with_id(None, 1, "car", Some(Mesh::quad("body", 4.0)))?;
    for (id, wheel) in [(10, "wheel-fl"), (11, "wheel-fr"), (12, "wheel-rl"), (13, "wheel-rr")] {
        scene.insert_with_id(Some(car), id, wheel, Some(Mesh::quad(wheel, 1.0)))?;
    }
    let ground = scene.insert_with_id(None, 2, "ground", Some(Mesh::quad("plane", 100.0)))?;

    tracing::info!(nodes = scene.len(), "scene ready");

    // Ids are checked across the whole tree.
    if let Err(err) = scene.insert_with_id(Some(ground), 12, "duplicate", None) {
        println!("rejected: {err}");
    }

    scene.traverse_mut(None, |mut node| {
        if let Some(mesh) = node.payload_mut() {
            mesh.scale(0.5);
        }
    })?;

    println!("car subtree vertices: {}", vertex_count(&scene, car)?);
    println!("scene vertices: {}", vertex_count(&scene, scene.root_handle())?);

    if let Some(wheel) = scene.node_by_id(12) {
        let mesh = wheel.payload().map(|m| (&m.name, m.vertices[2]));
        println!("{} at depth {} carries {mesh:?}", wheel.label(), wheel.depth());
    }

    scene.remove(car)?;
    println!("after removing the car:");
    print!("{}", scene.outline());
    Ok(())
}
