// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_lcrs_tree::{NodeHandle, Tree};

/// Complete tree where every node has `fanout` children, `levels` deep below the root.
fn build_balanced(fanout: usize, levels: usize) -> (Tree<u64>, Vec<NodeHandle>) {
    let mut tree = Tree::new("root", Some(0)).unwrap();
    let mut frontier = vec![tree.root_handle()];
    let mut all = frontier.clone();
    for _ in 0..levels {
        let mut next = Vec::with_capacity(frontier.len() * fanout);
        for &parent in &frontier {
            for i in 0..fanout {
                next.push(tree.insert(Some(parent), "n", Some(i as u64)).unwrap());
            }
        }
        all.extend_from_slice(&next);
        frontier = next;
    }
    (tree, all)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[16_usize, 128, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        // All children under the root: each append walks the sibling chain.
        group.bench_function(format!("wide_n{}", n), |b| {
            b.iter_batched(
                || Tree::<u64>::new("root", None).unwrap(),
                |mut tree| {
                    for _ in 0..n {
                        black_box(tree.insert(None, "n", None).unwrap());
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("deep_n{}", n), |b| {
            b.iter_batched(
                || Tree::<u64>::new("root", None).unwrap(),
                |mut tree| {
                    let mut parent = tree.root_handle();
                    for _ in 0..n {
                        parent = tree.insert(Some(parent), "n", None).unwrap();
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for &(fanout, levels) in &[(4_usize, 3_usize), (8, 3), (4, 6)] {
        let (tree, all) = build_balanced(fanout, levels);
        let last_id = tree.get(*all.last().unwrap()).unwrap().id();
        group.bench_function(format!("node_by_id_last_f{}_l{}", fanout, levels), |b| {
            b.iter(|| black_box(tree.node_by_id(black_box(last_id)).is_some()));
        });
        group.bench_function(format!("node_by_id_missing_f{}_l{}", fanout, levels), |b| {
            b.iter(|| black_box(tree.node_by_id(black_box(u32::MAX)).is_none()));
        });
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    for &(fanout, levels) in &[(4_usize, 4_usize), (16, 3)] {
        let (mut tree, _) = build_balanced(fanout, levels);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(format!("sum_payloads_f{}_l{}", fanout, levels), |b| {
            b.iter(|| {
                let mut sum = 0_u64;
                tree.traverse(None, |n| sum += n.payload().copied().unwrap_or(0))
                    .unwrap();
                black_box(sum)
            });
        });
        group.bench_function(format!("bump_payloads_f{}_l{}", fanout, levels), |b| {
            b.iter(|| {
                tree.traverse_mut(None, |mut n| {
                    if let Some(p) = n.payload_mut() {
                        *p = p.wrapping_add(1);
                    }
                })
                .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for &(fanout, levels) in &[(4_usize, 4_usize), (8, 3)] {
        group.bench_function(format!("first_subtree_f{}_l{}", fanout, levels), |b| {
            b.iter_batched(
                || build_balanced(fanout, levels),
                |(mut tree, all)| {
                    // all[1] is the root's first child.
                    tree.remove(all[1]).unwrap();
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_lookup,
    bench_traverse,
    bench_remove
);
criterion_main!(benches);
