//! The search-tree placement policy.
//!
//! Items are placed by comparison: for every node, everything in its left
//! subtree is smaller and everything in its right subtree is larger. That
//! makes `contains`/`get` take `O(height)` and makes an in-order walk sorted.
//! The tree does not rebalance itself, so its height depends on the order the
//! items arrive in.
//!
//! # Examples
//!
//! ```
//! use leveltree::{Order, SearchTree};
//!
//! let mut tree = SearchTree::new();
//! for x in [4, 2, 6, 1, 3, 5, 7] {
//!     tree.add(x);
//! }
//!
//! // Items already in the tree are rejected.
//! assert!(!tree.add(4));
//!
//! assert_eq!(tree.items(Order::Inorder), [&1, &2, &3, &4, &5, &6, &7]);
//!
//! // Removing a node with two children promotes its predecessor.
//! assert!(tree.remove(&4));
//! assert_eq!(tree.root(), Ok(&3));
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::node::{Link, Node, Side};
use crate::tree::Policy;

/// Places items by comparison and rejects duplicates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ordered;

impl<T> Policy<T> for Ordered
where
    T: Ord,
{
    fn insert(root: &mut Link<T>, item: T) -> Result<bool> {
        Ok(insert(root, item))
    }

    fn remove(root: &mut Link<T>, item: &T) -> Result<bool> {
        Ok(delete(root, item).is_some())
    }

    fn find<'a>(root: Option<&'a Node<T>>, item: &T) -> Option<&'a T> {
        let mut node = root;
        while let Some(n) = node {
            node = match item.cmp(&n.item) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.item),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    fn replace_root(root: &mut Node<T>, item: T) -> Result<T> {
        let above_left = root.left().map_or(true, |left| *largest(left) < item);
        let below_right = root.right().map_or(true, |right| item < *smallest(right));
        if above_left && below_right {
            Ok(root.set_item(item))
        } else {
            Err(Error::Precondition("the new root is out of order"))
        }
    }
}

/// Walks a cursor down from `link` by comparison with `item`. Stops on the
/// link holding an equal item or, if there is none, on the empty link where
/// `item` belongs. Sorted input makes the tree as deep as it is long, so
/// this must not recurse.
fn seek<'a, T: Ord>(mut link: &'a mut Link<T>, item: &T) -> &'a mut Link<T> {
    loop {
        let side = match link.as_deref() {
            None => return link,
            Some(node) => match item.cmp(&node.item) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return link,
                Ordering::Greater => Side::Right,
            },
        };
        if let Some(node) = link {
            link = node.link_mut(side);
        }
    }
}

fn insert<T: Ord>(root: &mut Link<T>, item: T) -> bool {
    let link = seek(root, &item);
    if link.is_some() {
        log::trace!("search tree already holds the item");
        return false;
    }
    *link = Some(Node::new_boxed(item));
    true
}

/// Unlinks the node holding `item` and returns its item.
fn delete<T: Ord>(root: &mut Link<T>, item: &T) -> Option<T> {
    let link = seek(root, item);
    let mut removed = link.take()?;
    *link = match (removed.left.take(), removed.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),

        // If we have two children we have to figure out which node to
        // promote. We choose the predecessor, the largest node in the
        // left subtree.
        (Some(left), Some(right)) => {
            let (predecessor, left) = take_largest(left);
            Some(Box::new(Node {
                item: predecessor,
                left,
                right: Some(right),
            }))
        }
    };
    Some(removed.item)
}

/// Returns the largest item of the subtree and the subtree without it.
fn take_largest<T>(node: Box<Node<T>>) -> (T, Link<T>) {
    let mut subtree = Some(node);
    let mut link = &mut subtree;
    while link.as_deref().map_or(false, |n| n.right.is_some()) {
        if let Some(n) = link {
            link = &mut n.right;
        }
    }
    // The largest node has no right child; its left subtree takes its place.
    if let Some(largest) = link.take() {
        let Node { item, left, .. } = *largest;
        *link = left;
        return (item, subtree);
    }
    unreachable!("a non-empty subtree has a largest item")
}

fn largest<T>(mut node: &Node<T>) -> &T {
    while let Some(right) = node.right() {
        node = right;
    }
    &node.item
}

fn smallest<T>(mut node: &Node<T>) -> &T {
    while let Some(left) = node.left() {
        node = left;
    }
    &node.item
}
