use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use valtree::{Binary, BinarySearchTree, GeneralTree, Tree};

const SEARCH_TREE_SIZES: &[(&str, usize)] = &[("bst-1k", 1_000), ("bst-10k", 10_000)];

const GENERAL_TREE_SIZES: &[(&str, usize)] = &[("general-10k", 10_000), ("general-100k", 100_000)];

/// Deterministic pseudo-random keys (64-bit LCG), so runs are comparable.
fn keys(count: usize) -> Vec<u64> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            state >> 16
        })
        .collect()
}

fn build_search_tree(keys: &[u64]) -> BinarySearchTree<u64> {
    let mut tree = BinarySearchTree::with_capacity(1 << 47, keys.len() + 1);
    for &key in keys {
        // Collisions of the generator are simply skipped
        let _ = tree.add(key);
    }
    tree
}

/// Builds a general tree where node `i` hangs beneath node `i / 8`.
fn build_general_tree(count: usize) -> GeneralTree<usize> {
    let mut tree = GeneralTree::with_capacity(0, count);
    for value in 1..count {
        tree.add_to(&(value / 8), value).unwrap();
    }
    tree
}

fn search_tree_insertion(c: &mut Criterion) {
    for (name, size) in SEARCH_TREE_SIZES {
        let keys = keys(*size);
        c.bench_function(&format!("{name}/insert"), |b| {
            b.iter(|| build_search_tree(black_box(&keys)));
        });
    }
}

fn search_tree_queries(c: &mut Criterion) {
    for (name, size) in SEARCH_TREE_SIZES {
        let keys = keys(*size);
        let tree = build_search_tree(&keys);
        c.bench_function(&format!("{name}/find"), |b| {
            b.iter(|| keys.iter().map(|key| *tree.find(black_box(key))).sum::<u64>());
        });
        c.bench_function(&format!("{name}/in-order"), |b| {
            b.iter(|| tree.in_order().count());
        });
    }
}

fn general_tree_traversals(c: &mut Criterion) {
    for (name, size) in GENERAL_TREE_SIZES {
        let tree = build_general_tree(*size);
        c.bench_function(&format!("{name}/pre-order"), |b| {
            b.iter(|| tree.pre_order().count());
        });
        c.bench_function(&format!("{name}/post-order"), |b| {
            b.iter(|| tree.post_order().count());
        });
        c.bench_function(&format!("{name}/breadth-first"), |b| {
            b.iter(|| tree.breadth_first().count());
        });
        c.bench_function(&format!("{name}/depth+width"), |b| {
            b.iter(|| (tree.depth(), tree.width()));
        });
    }
}

criterion_group!(regression, search_tree_insertion, search_tree_queries);
criterion_group! {
    name = traversals;
    config = Criterion::default().sample_size(10);
    targets = general_tree_traversals
}
criterion_main!(regression, traversals);
