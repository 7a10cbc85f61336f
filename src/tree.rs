//! An unbalanced Binary Search Tree of unique values. Nodes are stored in an arena (a `Vec`) and
//! refer to their children by index, so the whole tree is a single allocation that grows as
//! values are inserted.
//!
//! The tree only ever grows. Inserting a value that is already present does nothing.
//!
//! # Examples
//!
//! ```
//! use algobench::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&5));
//! assert_eq!(tree.height(), -1);
//!
//! tree.insert(5).insert(3).insert(7);
//! assert!(tree.search(&3));
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.height(), 1);
//!
//! // Inserting a duplicate is silently ignored.
//! tree.insert(5);
//! assert_eq!(tree.size(), 3);
//!
//! // Inorder traversal is always sorted.
//! assert_eq!(tree.inorder(), vec![&3, &5, &7]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

/// Index of a [`Node`] in a tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeId(usize);

/// A child slot. Either nothing hangs here or the node at the given index does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Link {
    Leaf,
    Node(NodeId),
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Link,
    right: Link,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Link::Leaf,
            right: Link::Leaf,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A Binary Search Tree holding unique, totally ordered values.
///
/// Every value in a node's left subtree is strictly less than the node's value and every value
/// in its right subtree is strictly greater. The number of nodes and the height of the tree are
/// cached so reading them is `O(1)`.
#[derive(Clone)]
pub struct Tree<T> {
    // Nodes are never removed, so the arena length is also the size of the tree.
    nodes: Vec<Node<T>>,
    root: Link,
    height: isize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size())
            .field("height", &self.height)
            .field("values", &self.inorder())
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: Link::Leaf,
            height: -1,
        }
    }

    /// Generates a new, empty `Tree` with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of values in the tree.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree has a
    /// height of `-1` and a tree with a single node has a height of `0`.
    pub fn height(&self) -> isize {
        self.height
    }

    /// The root of the tree, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use algobench::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.value(), &5);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(3));
    /// assert!(root.right().is_none());
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.node_ref(self.root)
    }

    /// Values of the tree in inorder (left subtree, node, right subtree), which is ascending.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size());
        self.inorder_from(self.root, &mut values);
        values
    }

    /// An iterator over the values of the tree in ascending order. Unlike [`Tree::inorder`] this
    /// walks the tree with an explicit stack and doesn't collect the values up front.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    fn inorder_from<'a>(&'a self, link: Link, values: &mut Vec<&'a T>) {
        if let Link::Node(id) = link {
            let node = self.node(id);
            self.inorder_from(node.left, values);
            values.push(&node.value);
            self.inorder_from(node.right, values);
        }
    }

    fn height_from(&self, link: Link) -> isize {
        match link {
            Link::Leaf => -1,
            Link::Node(id) => {
                let node = self.node(id);
                1 + self.height_from(node.left).max(self.height_from(node.right))
            }
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    fn node_ref(&self, link: Link) -> Option<NodeRef<'_, T>> {
        match link {
            Link::Leaf => None,
            Link::Node(id) => Some(NodeRef { tree: self, id }),
        }
    }

    fn alloc(&mut self, value: T) -> NodeId {
        self.nodes.push(Node::new(value));
        NodeId(self.nodes.len() - 1)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` into the tree. If an equal value is already present the tree is left
    /// unchanged. Returns the tree so inserts can be chained.
    ///
    /// After a successful insert the height is recomputed by walking the whole tree, so an
    /// insert costs `O(size)` rather than `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use algobench::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).insert(2).insert(3);
    ///
    /// // Ascending inserts make a right-skewed tree.
    /// assert_eq!(tree.height(), 2);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self {
        let inserted = match self.root {
            Link::Leaf => {
                let id = self.alloc(value);
                self.root = Link::Node(id);
                true
            }
            Link::Node(root) => self.insert_below(root, value),
        };

        if inserted {
            self.height = self.height_from(self.root);
        } else {
            trace!(size = self.size(), "duplicate value rejected");
        }

        self
    }

    /// Returns `true` if `value` is in the tree, recursing down from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use algobench::tree::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert!(tree.search(&30));
    /// assert!(!tree.search(&65));
    /// ```
    pub fn search(&self, value: &T) -> bool {
        self.search_from(self.root, value)
    }

    /// Returns `true` if `value` is in the tree, walking a cursor down from the root in a loop.
    /// Always agrees with [`Tree::search`].
    pub fn search_iterative(&self, value: &T) -> bool {
        let mut cursor = self.root;
        while let Link::Node(id) = cursor {
            let node = self.node(id);
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }

        false
    }

    /// Checks that every node's value lies strictly between the bounds inherited from its
    /// ancestors. This holds for every tree built through [`Tree::insert`]; it exists to verify
    /// exactly that.
    pub fn is_valid_bst(&self) -> bool {
        self.is_valid_from(self.root, None, None)
    }

    fn insert_below(&mut self, id: NodeId, value: T) -> bool {
        let node = self.node(id);
        let (child, side) = match value.cmp(&node.value) {
            Ordering::Less => (node.left, Side::Left),
            Ordering::Equal => return false,
            Ordering::Greater => (node.right, Side::Right),
        };

        match child {
            Link::Node(child) => self.insert_below(child, value),
            Link::Leaf => {
                let leaf = self.alloc(value);
                *self.nodes[id.0].child_mut(side) = Link::Node(leaf);
                true
            }
        }
    }

    fn search_from(&self, link: Link, value: &T) -> bool {
        match link {
            Link::Leaf => false,
            Link::Node(id) => {
                let node = self.node(id);
                match value.cmp(&node.value) {
                    Ordering::Less => self.search_from(node.left, value),
                    Ordering::Equal => true,
                    Ordering::Greater => self.search_from(node.right, value),
                }
            }
        }
    }

    fn is_valid_from(&self, link: Link, lower: Option<&T>, upper: Option<&T>) -> bool {
        let Link::Node(id) = link else {
            return true;
        };
        let node = self.node(id);

        if lower.is_some_and(|lower| node.value <= *lower)
            || upper.is_some_and(|upper| node.value >= *upper)
        {
            return false;
        }

        self.is_valid_from(node.left, lower, Some(&node.value))
            && self.is_valid_from(node.right, Some(&node.value), upper)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Builds a tree by inserting each value in iteration order. Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed view of one node in a [`Tree`].
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.tree.node(self.id).value
    }

    /// The left child, holding smaller values.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node_ref(self.tree.node(self.id).left)
    }

    /// The right child, holding larger values.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node_ref(self.tree.node(self.id).right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

/// Ascending iterator over the values of a [`Tree`]. See [`Tree::iter`].
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    // Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<NodeId>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut link: Link) {
        while let Link::Node(id) = link {
            self.stack.push(id);
            link = self.tree.node(id).left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(id);
        self.push_left_spine(node.right);
        Some(&node.value)
    }
}
