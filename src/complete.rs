//! The level-complete placement policy.
//!
//! Every level of the tree is full except possibly the last one. New items go
//! into the next free slot, alternating between the root's left and right
//! subtree so that both halves grow evenly; inside each half the last level
//! fills up from left to right. Adding the items 1 to 15 gives:
//!
//! ```text
//!                 1
//!          2             3
//!      4       6     5       7
//!    8  10  12  14  9  11  13  15
//! ```
//!
//! Because of that, reading the tree in general order (see
//! [`Order::General`][crate::Order::General]) gives back the items in the
//! order they were added. Removal relies on it: the tree is flattened in
//! general order, the item is taken out and everything else is added again.
//!
//! Finding the next slot compares the sizes of the two halves at the root and
//! costs O(height²) per insertion.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::node::{self, Link, Node, Side};
use crate::traverse;
use crate::tree::Policy;
use crate::util;

/// Places items level by level. Search and removal go by equality only, so
/// items need nothing more than `PartialEq` and duplicates are kept.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelComplete;

impl<T> Policy<T> for LevelComplete
where
    T: PartialEq,
{
    fn insert(root: &mut Link<T>, item: T) -> Result<bool> {
        push(root, item)?;
        Ok(true)
    }

    fn remove(root: &mut Link<T>, item: &T) -> Result<bool> {
        let index = match traverse::general(root.as_deref())
            .iter()
            .position(|stored| *stored == item)
        {
            Some(index) => index,
            None => return Ok(false),
        };

        let mut items = traverse::into_general(root.take());
        items.remove(index);
        log::trace!("rebuilding level-complete tree from {} items", items.len());
        for item in items {
            push(root, item)?;
        }

        Ok(true)
    }

    fn find<'a>(root: Option<&'a Node<T>>, item: &T) -> Option<&'a T> {
        let node = root?;
        if node.item == *item {
            return Some(&node.item);
        }
        <Self as Policy<T>>::find(node.left(), item)
            .or_else(|| <Self as Policy<T>>::find(node.right(), item))
    }

    fn replace_root(root: &mut Node<T>, item: T) -> Result<T> {
        Ok(root.set_item(item))
    }
}

/// Turns to take from the root to reach a node.
type Path = Vec<Side>;

/// Adds `item` as a new leaf in the next free slot.
fn push<T>(root: &mut Link<T>, item: T) -> Result<()> {
    let node = match root {
        None => {
            *root = Some(Node::new_boxed(item));
            return Ok(());
        }
        Some(node) => node,
    };

    let path = next_parent(node)?;
    let parent = descend_mut(node, &path)?;
    let slot = if parent.left.is_none() {
        &mut parent.left
    } else if parent.right.is_none() {
        &mut parent.right
    } else {
        return Err(Error::Invariant("the chosen parent has no free child"));
    };
    *slot = Some(Node::new_boxed(item));

    Ok(())
}

/// Finds the node that gets the next item as a child.
fn next_parent<T>(root: &Node<T>) -> Result<Path> {
    let height = node::height(Some(root));
    if height == 1 {
        return Ok(Path::new());
    }

    let left_len = node::count(root.left());
    let right_len = node::count(root.right());
    // Both halves of the tree are perfect trees of `height - 1` levels.
    let halves_full = left_len == right_len && right_len == util::full_tree_len(height - 1);
    // Levels are only searched down to the one above the deepest.
    let max_depth = height.saturating_sub(3);

    let (side, found) = if left_len < right_len {
        match root.left() {
            None => return Ok(Path::new()),
            Some(left) => (Side::Left, first_open(left, max_depth)),
        }
    } else if right_len < left_len {
        match root.right() {
            None => return Ok(Path::new()),
            Some(right) => (
                Side::Right,
                first_open(right, max_depth).or_else(|| Some(leftmost_open(right))),
            ),
        }
    } else {
        let left = root
            .left()
            .ok_or(Error::Invariant("a tree taller than one level has no left half"))?;
        if halves_full {
            (Side::Left, Some(leftmost_open(left)))
        } else {
            (Side::Left, first_open(left, max_depth))
        }
    };

    let mut path = found.ok_or(Error::Invariant("no open slot in the smaller half"))?;
    path.insert(0, side);
    Ok(path)
}

/// The first node missing a child, scanning the subtree level by level from
/// the top, left to right, no deeper than `max_depth` below `node`.
fn first_open<T>(node: &Node<T>, max_depth: usize) -> Option<Path> {
    let mut queue = VecDeque::from([(node, Path::new())]);
    while let Some((n, path)) = queue.pop_front() {
        if path.len() > max_depth {
            break;
        }
        if !n.is_full() {
            return Some(path);
        }
        for side in [Side::Left, Side::Right] {
            if let Some(child) = n.child(side) {
                let mut child_path = path.clone();
                child_path.push(side);
                queue.push_back((child, child_path));
            }
        }
    }
    None
}

/// The leftmost node without a left child. Attaching there starts a new level.
fn leftmost_open<T>(mut node: &Node<T>) -> Path {
    let mut path = Path::new();
    while let Some(left) = node.left() {
        path.push(Side::Left);
        node = left;
    }
    path
}

fn descend_mut<'a, T>(mut node: &'a mut Node<T>, path: &[Side]) -> Result<&'a mut Node<T>> {
    for side in path {
        node = node
            .link_mut(*side)
            .as_deref_mut()
            .ok_or(Error::Invariant("path leads outside the tree"))?;
    }
    Ok(node)
}
