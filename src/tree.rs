//! The tree itself, generic over how items are placed.
//!
//! A [`Tree`] owns its nodes and implements everything that doesn't depend on
//! where items go: height, size, clearing, copying, root access and all the
//! traversals. Placement, search and removal are delegated to a [`Policy`]:
//!
//! * [`LevelComplete`] keeps the tree level-complete (see
//!   [`BinaryTree`]).
//! * [`Ordered`] keeps search-tree ordering (see [`SearchTree`]).
//!
//! # Examples
//!
//! ```
//! use leveltree::{BinaryTree, Order};
//!
//! let mut tree: BinaryTree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.len(), 7);
//!
//! assert!(tree.remove(&3));
//! assert!(!tree.remove(&3));
//! assert_eq!(tree.items(Order::General), [&1, &2, &4, &5, &6, &7]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::complete::LevelComplete;
use crate::error::{Error, Result};
use crate::node::{self, Link, Node};
use crate::ordered::Ordered;
use crate::traverse::{self, Order};
use crate::util;

/// Decides where items live in a [`Tree`].
///
/// A policy is a zero-sized marker type picked by the tree's type parameter,
/// so the choice costs nothing at runtime. Every function receives the root
/// link of the tree and must leave it satisfying the policy's own shape
/// invariant.
pub trait Policy<T> {
    /// Places `item` into the tree. Returns `false` if the policy rejects it,
    /// in which case the tree is unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::Invariant`] if the tree's shape turns out to be broken.
    fn insert(root: &mut Link<T>, item: T) -> Result<bool>;

    /// Removes one item equal to `item`. Returns `false`, with the tree
    /// unchanged, if there is none.
    ///
    /// # Errors
    ///
    /// [`Error::Invariant`] if the tree's shape turns out to be broken.
    fn remove(root: &mut Link<T>, item: &T) -> Result<bool>;

    /// Finds a stored item equal to `item`.
    fn find<'a>(root: Option<&'a Node<T>>, item: &T) -> Option<&'a T>;

    /// Stores `item` in the root node and returns the item it replaces.
    ///
    /// # Errors
    ///
    /// [`Error::Precondition`] if the policy can't accept `item` at the root.
    fn replace_root(root: &mut Node<T>, item: T) -> Result<T>;
}

/// A binary tree that keeps every level full except possibly the last one.
pub type BinaryTree<T> = Tree<T, LevelComplete>;

/// A binary search tree: smaller items to the left, larger to the right.
pub type SearchTree<T> = Tree<T, Ordered>;

/// An owned binary tree whose shape is governed by the policy `P`.
pub struct Tree<T, P = LevelComplete> {
    root: Link<T>,
    policy: PhantomData<P>,
}

impl<T, P> Default for Tree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Drop for Tree<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Manual implementation of `Clone` so `P` doesn't have to be `Clone`.
/// The copy shares nothing with the original. Nodes are copied from an
/// explicit stack, like `clear` frees them.
impl<T, P> Clone for Tree<T, P>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::deep_clone(self.root_node()),
            policy: PhantomData,
        }
    }
}

/// Two trees are equal when they have the same shape and the same items in
/// the same places.
impl<T, P> PartialEq for Tree<T, P>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        node::same(self.root_node(), other.root_node())
    }
}

impl<T, P> Eq for Tree<T, P> where T: Eq {}

/// Shows the items in linear order, which is enough to tell the shape of
/// either kind of tree apart.
impl<T, P> fmt::Debug for Tree<T, P>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("linear", &traverse::linear(self.root_node()))
            .finish()
    }
}

impl<T, P> FromIterator<T> for Tree<T, P>
where
    P: Policy<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, P> Extend<T> for Tree<T, P>
where
    P: Policy<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T, P> Tree<T, P> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            policy: PhantomData,
        }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has height 0 and a
    /// tree holding only a root has height 1.
    pub fn height(&self) -> usize {
        node::height(self.root_node())
    }

    /// The number of items in the tree.
    pub fn len(&self) -> usize {
        node::count(self.root_node())
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        // Drop nodes from an explicit stack instead of recursively so a tall
        // tree can't overflow the call stack.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// The item stored at the root.
    ///
    /// # Errors
    ///
    /// [`Error::Precondition`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveltree::{BinaryTree, Error};
    ///
    /// let mut tree = BinaryTree::new();
    /// assert!(matches!(tree.root(), Err(Error::Precondition(_))));
    ///
    /// tree.add('a');
    /// tree.add('b');
    /// assert_eq!(tree.root(), Ok(&'a'));
    /// ```
    pub fn root(&self) -> Result<&T> {
        self.root_node()
            .map(Node::item)
            .ok_or(Error::Precondition("the tree is empty"))
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Visits every item: node, left subtree, right subtree.
    pub fn preorder<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        traverse::preorder(self.root_node(), &mut visit);
    }

    /// Visits every item: left subtree, node, right subtree.
    pub fn inorder<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        traverse::inorder(self.root_node(), &mut visit);
    }

    /// Visits every item: left subtree, right subtree, node.
    pub fn postorder<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        traverse::postorder(self.root_node(), &mut visit);
    }

    /// Visits every item in general order. For a [`BinaryTree`] this is
    /// exactly the order the items were added in.
    pub fn general_order<'a>(&'a self, visit: impl FnMut(&'a T)) {
        traverse::general(self.root_node()).into_iter().for_each(visit);
    }

    /// Visits every item level by level, left to right.
    pub fn linear_order<'a>(&'a self, visit: impl FnMut(&'a T)) {
        traverse::linear(self.root_node()).into_iter().for_each(visit);
    }

    /// Visits every item in the given order.
    pub fn traverse<'a>(&'a self, order: Order, visit: impl FnMut(&'a T)) {
        match order {
            Order::Preorder => self.preorder(visit),
            Order::Inorder => self.inorder(visit),
            Order::Postorder => self.postorder(visit),
            Order::General => self.general_order(visit),
            Order::Linear => self.linear_order(visit),
        }
    }

    /// A snapshot of the items in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use leveltree::{BinaryTree, Order};
    ///
    /// let tree: BinaryTree<_> = (1..=7).collect();
    /// assert_eq!(tree.items(Order::Linear), [&1, &2, &3, &4, &6, &5, &7]);
    /// assert_eq!(tree.items(Order::Inorder), [&4, &2, &6, &1, &5, &3, &7]);
    /// ```
    pub fn items(&self, order: Order) -> Vec<&T> {
        let mut items = Vec::new();
        self.traverse(order, |item| items.push(item));
        items
    }
}

impl<T, P> Tree<T, P>
where
    P: Policy<T>,
{
    /// Generates a tree holding just `item`.
    pub fn with_root(item: T) -> Self {
        let mut tree = Self::new();
        tree.add(item);
        tree
    }

    /// Adds `item` to the tree. Returns whether it was stored: a
    /// [`BinaryTree`] stores everything, a [`SearchTree`] rejects items it
    /// already holds.
    ///
    /// # Panics
    ///
    /// If the tree's structural invariant is broken.
    pub fn add(&mut self, item: T) -> bool {
        util::assert_invariant("Tree::add", P::insert(&mut self.root, item))
    }

    /// Removes one item equal to `item` from the tree. Returns `false` and
    /// leaves the tree untouched if there is no such item.
    ///
    /// # Panics
    ///
    /// If the tree's structural invariant is broken.
    pub fn remove(&mut self, item: &T) -> bool {
        util::assert_invariant("Tree::remove", P::remove(&mut self.root, item))
    }

    /// Whether an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        P::find(self.root_node(), item).is_some()
    }

    /// The stored item equal to `item`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if there is no such item.
    pub fn get(&self, item: &T) -> Result<&T> {
        P::find(self.root_node(), item).ok_or(Error::NotFound)
    }

    /// Stores `item` at the root and returns the item it replaces.
    ///
    /// # Errors
    ///
    /// [`Error::Precondition`] if the tree is empty, or if the policy can't
    /// accept `item` at the root (a [`SearchTree`] root must stay between
    /// its subtrees).
    pub fn set_root(&mut self, item: T) -> Result<T> {
        let root = self
            .root
            .as_deref_mut()
            .ok_or(Error::Precondition("the tree is empty"))?;
        P::replace_root(root, item)
    }
}
