use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use algobench::tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order, so every node only has a right child.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting values so that, without any rebalancing, the resultant tree is
/// still balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let mut tree = Tree::with_capacity(xs.len());
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Unbalanced trees stop at 2^11 nodes. Every operation recurses once per level.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, &i| {
                b.iter(|| f(&tree, black_box(i)))
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _found = black_box(tree.search(&i));
    });
    bench_helper(c, "search-iterative", |tree, i| {
        let _found = black_box(tree.search_iterative(&i));
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _found = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "search-iterative-miss", |tree, i| {
        let _found = black_box(tree.search_iterative(&(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        let mut tree = tree.clone();
        tree.insert(i + 1);
        black_box(tree);
    });

    bench_helper(c, "inorder", |tree, _| {
        let _values = black_box(tree.inorder());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
