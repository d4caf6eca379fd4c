//! The orders a tree can be walked in.
//!
//! Besides the three classic depth-first orders there are two orders that
//! expose how a level-complete tree was built:
//!
//! * **general order** lists the root and then the breadth-first listing of
//!   the left subtree interleaved, position by position, with the
//!   breadth-first listing of the right subtree. For a level-complete tree this
//!   is exactly the order the items were added in.
//! * **linear order** is the physical breadth-first order of the tree: level
//!   by level, left to right.
//!
//! ```text
//!                 1
//!          2             3
//!      4       6     5       7
//!    8  10  12  14  9  11  13  15
//!
//! general: 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
//! linear:  1 2 3 4 6 5 7 8 10 12 14 9 11 13 15
//! ```

use std::collections::VecDeque;

use crate::node::{Link, Node};

/// Selects a traversal for [`Tree::traverse`][crate::Tree::traverse] and
/// [`Tree::items`][crate::Tree::items].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
    /// The order a level-complete tree was built in.
    General,
    /// Breadth-first, level by level, left to right.
    Linear,
}

// The depth-first walks keep their own stack: a search tree fed sorted input
// is as deep as it is long.

pub(crate) fn preorder<'a, T>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a T)) {
    let mut stack: Vec<&Node<T>> = node.into_iter().collect();
    while let Some(n) = stack.pop() {
        visit(&n.item);
        stack.extend(n.right());
        stack.extend(n.left());
    }
}

pub(crate) fn inorder<'a, T>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a T)) {
    let mut stack: Vec<&Node<T>> = Vec::new();
    let mut next = node;
    loop {
        while let Some(n) = next {
            stack.push(n);
            next = n.left();
        }
        match stack.pop() {
            None => break,
            Some(n) => {
                visit(&n.item);
                next = n.right();
            }
        }
    }
}

pub(crate) fn postorder<'a, T>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a T)) {
    // Node, right, left reversed is left, right, node.
    let mut stack: Vec<&Node<T>> = node.into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(n) = stack.pop() {
        reversed.push(&n.item);
        stack.extend(n.left());
        stack.extend(n.right());
    }
    reversed.into_iter().rev().for_each(visit);
}

/// The items of the subtree in breadth-first order.
pub(crate) fn breadth_first<T>(node: Option<&Node<T>>) -> Vec<&T> {
    let mut items = Vec::new();
    let mut queue: VecDeque<&Node<T>> = node.into_iter().collect();
    while let Some(n) = queue.pop_front() {
        items.push(&n.item);
        queue.extend(n.left());
        queue.extend(n.right());
    }
    items
}

pub(crate) fn linear<T>(node: Option<&Node<T>>) -> Vec<&T> {
    breadth_first(node)
}

pub(crate) fn general<T>(node: Option<&Node<T>>) -> Vec<&T> {
    match node {
        None => Vec::new(),
        Some(n) => interleave(&n.item, breadth_first(n.left()), breadth_first(n.right())),
    }
}

/// Consumes the subtree, returning its items in general order.
///
/// This is the collection a level-complete tree is rebuilt from.
pub(crate) fn into_general<T>(link: Link<T>) -> Vec<T> {
    match link {
        None => Vec::new(),
        Some(node) => {
            let Node { item, left, right } = *node;
            interleave(item, into_breadth_first(left), into_breadth_first(right))
        }
    }
}

fn into_breadth_first<T>(link: Link<T>) -> Vec<T> {
    let mut items = Vec::new();
    let mut queue: VecDeque<Box<Node<T>>> = link.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        let Node { item, left, right } = *node;
        items.push(item);
        queue.extend(left);
        queue.extend(right);
    }
    items
}

/// `first`, then one from `left`, one from `right` and so on. Whatever is left
/// of the longer list goes at the end.
fn interleave<I>(first: I, left: Vec<I>, right: Vec<I>) -> Vec<I> {
    let mut items = Vec::with_capacity(1 + left.len() + right.len());
    items.push(first);

    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => break,
            (l, r) => items.extend(l.into_iter().chain(r)),
        }
    }
    items
}
