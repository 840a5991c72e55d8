//! This crate exposes an ordered set backed by a self-balancing Binary
//! Search Tree (specifically, an AVL tree).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores some sort of value (the
//! element that was inserted, for example) and sometimes has child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! ## AVL balancing
//!
//! A plain BST makes no promise about its height: inserting elements in
//! ascending order produces a linked-list-shaped tree where every lookup
//! takes `O(n)`. An AVL tree restores the `O(lg n)` height guarantee by
//! keeping a third invariant:
//!
//! 3. For every `Node`, the heights of its left and right subtrees differ
//!    by at most one.
//!
//! Whenever an insertion breaks invariant 3, the tree repairs itself with
//! one or two *rotations*: local restructurings that change which node
//! roots a subtree while preserving invariants 1 and 2.
//!
//! The [`AvlSet`] in this crate lets balancing be switched off at
//! construction time, so the balanced and degenerate behaviors can be
//! compared directly (see the benchmarks).
//!
//! # Examples
//!
//! ```
//! use avlset::AvlSet;
//!
//! let mut set = AvlSet::new();
//! for x in [3, 1, 4, 1, 5] {
//!     set.add(x);
//! }
//!
//! // The second `1` was a duplicate and was ignored.
//! assert_eq!(set.size(), 4);
//! assert!(set.contains(&4));
//!
//! // Iteration is always in ascending order.
//! let elements: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(elements, [1, 3, 4, 5]);
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod avl;

#[cfg(test)]
pub(crate) mod test;

pub use avl::AvlSet;
