//! This crate collects small textbook algorithms, several of them in both a deliberately naive
//! and an optimized form, together with a harness that times the two against each other.
//!
//! ## Binary Search Tree
//!
//! The centrepiece is [`tree::Tree`], an unbalanced Binary Search Tree. BSTs are typically
//! defined recursively using the notion of a `Node`. A `Node` stores some value and sometimes
//! has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest path from
//! the root `Node` to a leaf `Node`). Nothing here rebalances the tree, so inserting values in
//! sorted order produces a tree whose height is one less than its size. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Everything else
//!
//! - [`primes`]: primality, prime sums and factorization.
//! - [`sort`]: quicksort, exchange sort, Dutch flag partitioning, top-n.
//! - [`control`]: single and nested loop arithmetic.
//! - [`dslist`]: copying list transforms.
//! - [`strops`]: string reversal and palindromes.
//! - [`generator`]: random fill data.
//! - [`sql`]: read-only lookups against the Chinook sample database.
//! - [`harness`]: naive-versus-optimized timing.
//! - [`suite`]: runs every algorithm once and reports which sections passed.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod control;
pub mod dslist;
pub mod error;
pub mod generator;
pub mod harness;
pub mod primes;
pub mod sort;
pub mod sql;
pub mod strops;
pub mod suite;
pub mod tree;

pub use error::{Error, Result};
