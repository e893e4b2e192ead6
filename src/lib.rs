//! An Order-Statistics Tree (OST): a binary search tree over a set of ordered
//! values that also answers rank and range-counting questions.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Since both comparisons are strict, the tree stores a **set**: inserting a
//! value that is already present is a no-op.
//!
//! ## Order statistics
//!
//! Each `Node` additionally caches the number of nodes in the subtree rooted
//! at it. With that count available at every step of a descent, the tree can
//! find the `i`-th smallest value ([`Tree::get_ith`]) or count the values
//! above, below, or between bounds ([`Tree::num_geq`], [`Tree::num_leq`],
//! [`Tree::num_range`]) in `O(height)` rather than `O(N)`.
//!
//! The tree does **not** rebalance itself. Inserting values in sorted order
//! produces a tree whose height equals its size. When the full set of values
//! is known upfront, [`Tree::from_sorted`] builds a perfectly balanced tree
//! instead.
//!
//! # Examples
//!
//! ```
//! use ost::Tree;
//!
//! let tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.get_ith(3), Some(&4));
//! assert_eq!(tree.num_geq(&5), 4);
//! assert_eq!(tree.num_range(&3, &8), 5);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod rank;
pub mod render;
mod traversal;
mod tree;

pub use error::BuildError;
pub use traversal::Visit;
pub use tree::Tree;
