use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bst_traverse::traverse;
use bst_traverse::tree::{Node, Tree};

use std::collections::VecDeque;

/// Builds a tree holding `0..len` by inserting midpoints first, so the
/// unbalanced tree comes out shallow instead of degenerating into a chain.
fn midpoint_order_tree(len: i32) -> Tree<i32> {
    let mut tree = Tree::new();
    let mut ranges = VecDeque::new();
    ranges.push_back((0, len));

    while let Some((lo, hi)) = ranges.pop_front() {
        if lo >= hi {
            continue;
        }
        let mid = lo + (hi - lo) / 2;
        tree.insert(mid).expect("each midpoint is visited once");
        ranges.push_back((lo, mid));
        ranges.push_back((mid + 1, hi));
    }

    tree
}

/// Helper to bench a traversal function.
/// It creates a group for the given name and closure and runs it against
/// trees of various sizes before finishing the group.
fn bench_traversal(c: &mut Criterion, name: &str, f: impl Fn(Option<&Node<i32>>) -> Vec<&i32>) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let tree = midpoint_order_tree(num_nodes);

        let id = BenchmarkId::from_parameter(num_nodes);
        group.bench_function(id, |b| {
            b.iter(|| {
                let _values = black_box(f(black_box(tree.root())));
            })
        });
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let tree = midpoint_order_tree(num_nodes);

        let id = BenchmarkId::from_parameter(num_nodes);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    let _ = tree.insert(black_box(num_nodes));
                    time += instant.elapsed();
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_traversal(c, "pre-order", traverse::pre_order);
    bench_traversal(c, "in-order", traverse::in_order);
    bench_traversal(c, "post-order", traverse::post_order);
    bench_traversal(c, "level-order", traverse::level_order);

    bench_insert(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
