//! This crate exposes a binary tree that keeps itself level-complete and a
//! binary search tree built on the same engine.
//!
//! ## Level-complete tree
//!
//! A [`BinaryTree`] fills every level before starting the next one, so a tree
//! holding `N` items is always `⌈lg(N + 1)⌉` levels tall no matter what the
//! items are. Items are not compared when they are placed; instead the tree
//! remembers the order they were added in. Walking it in
//! [general order][Order::General] gives that order back, which is also how
//! removal works: the tree is flattened, the item is taken out and the tree is
//! rebuilt from what is left.
//!
//! ## Binary Search Tree
//!
//! A [`SearchTree`] places items by comparison. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching takes `O(height)` and an [in-order][Order::Inorder] walk visits
//! the items sorted. Removing a node with two children promotes its in-order
//! predecessor.
//!
//! ## Shared engine
//!
//! Both are a [`Tree`] with a different placement [`Policy`]. Everything that
//! doesn't depend on where items go (height, size, clearing, copying, root
//! access and the traversals) is implemented once on [`Tree`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod complete;
pub mod error;
pub mod node;
pub mod ordered;
pub mod traverse;
pub mod tree;
mod util;

pub use complete::LevelComplete;
pub use error::{Error, Result};
pub use node::{Link, Node, Side};
pub use ordered::Ordered;
pub use traverse::Order;
pub use tree::{BinaryTree, Policy, SearchTree, Tree};
