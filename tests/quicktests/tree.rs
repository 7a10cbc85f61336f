use algobench::tree::Tree;

use std::collections::BTreeSet;

use crate::Order;

/// Builds a tree by inserting `xs` one at a time, checking the invariant after every insert.
fn build_checked(xs: &[i16]) -> Option<Tree<i16>> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
        if !tree.is_valid_bst() {
            return None;
        }
    }

    Some(tree)
}

#[quickcheck]
fn inorder_is_sorted_dedup(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.iter().collect();

    tree.inorder() == expected.iter().copied().collect::<Vec<_>>() && tree.size() == expected.len()
}

#[quickcheck]
fn iter_matches_inorder(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.iter().collect::<Vec<_>>() == tree.inorder()
}

#[quickcheck]
fn search_strategies_agree(xs: Vec<i8>, targets: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    targets
        .iter()
        .chain(tree.inorder())
        .all(|p| tree.search(p) == tree.search_iterative(p))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x) && tree.search_iterative(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x) && !tree.search_iterative(x))
}

#[quickcheck]
fn valid_after_every_insert(xs: Vec<i16>, order: Order) -> bool {
    let mut xs = xs;
    order.apply(&mut xs);

    build_checked(&xs).is_some()
}

#[quickcheck]
fn reinsert_is_noop(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let size = tree.size();
    let height = tree.height();
    let before: Vec<i16> = tree.iter().copied().collect();

    tree.extend(xs);

    tree.size() == size && tree.height() == height && tree.iter().copied().eq(before)
}

#[quickcheck]
fn height_bounds(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let size = tree.size() as isize;

    // A perfectly balanced tree is as short as it gets and a chain as tall.
    let min_height = (usize::BITS - (size as usize).leading_zeros()) as isize - 1;
    tree.height() >= min_height && tree.height() <= size - 1
}

#[quickcheck]
fn skewed_height(n: u8, descending: bool) -> bool {
    let order = if descending {
        Order::Descending
    } else {
        Order::Ascending
    };
    let mut xs: Vec<u8> = (0..n).collect();
    order.apply(&mut xs);
    let tree: Tree<_> = xs.into_iter().collect();

    tree.height() == n as isize - 1 && tree.is_valid_bst()
}

#[test]
fn empty_and_single() {
    let mut tree = Tree::new();
    assert_eq!(tree.height(), -1);

    tree.insert(42);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.size(), 1);
    assert!(tree.search(&42));
    assert!(!tree.search(&41));
}
