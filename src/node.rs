//! The cell every tree is made of.

use std::mem;

/// An owned, possibly empty, subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Which child of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

/// A `Node` stores one item and owns up to two children. Nodes never share
/// children so a tree of them can't contain cycles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new childless `Node` holding `item`.
    pub fn new(item: T) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self::new(item))
    }

    /// The item stored in this node.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Replaces the stored item and returns the old one.
    pub fn set_item(&mut self, item: T) -> T {
        mem::replace(&mut self.item, item)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// The child on the given side, if any.
    pub fn child(&self, side: Side) -> Option<&Node<T>> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Replaces the left subtree and returns the old one.
    pub fn set_left(&mut self, left: Link<T>) -> Link<T> {
        mem::replace(&mut self.left, left)
    }

    /// Replaces the right subtree and returns the old one.
    pub fn set_right(&mut self, right: Link<T>) -> Link<T> {
        mem::replace(&mut self.right, right)
    }

    /// A node with no children is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether both children are present.
    pub(crate) fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub(crate) fn link_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// How many levels are in the subtree. An empty subtree has a height of 0 and
/// a single node a height of 1.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> usize {
    // Level by level, so a list-shaped subtree doesn't recurse once per node.
    let mut level: Vec<&Node<T>> = node.into_iter().collect();
    let mut height = 0;
    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
    }
    height
}

/// How many nodes are in the subtree.
pub(crate) fn count<T>(node: Option<&Node<T>>) -> usize {
    let mut stack: Vec<&Node<T>> = node.into_iter().collect();
    let mut count = 0;
    while let Some(n) = stack.pop() {
        count += 1;
        stack.extend(n.left());
        stack.extend(n.right());
    }
    count
}

/// A deep copy of the subtree that shares nothing with it.
pub(crate) fn deep_clone<T: Clone>(node: Option<&Node<T>>) -> Link<T> {
    let mut copy = None;
    let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
    if let Some(n) = node {
        stack.push((n, &mut copy));
    }
    while let Some((source, slot)) = stack.pop() {
        let Node { left, right, .. } = &mut **slot.insert(Node::new_boxed(source.item.clone()));
        if let Some(l) = source.left() {
            stack.push((l, left));
        }
        if let Some(r) = source.right() {
            stack.push((r, right));
        }
    }
    copy
}

/// Whether both subtrees have the same shape with equal items in the same
/// places.
pub(crate) fn same<T: PartialEq>(a: Option<&Node<T>>, b: Option<&Node<T>>) -> bool {
    let mut stack = vec![(a, b)];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(x), Some(y)) if x.item == y.item => {
                stack.push((x.left(), y.left()));
                stack.push((x.right(), y.right()));
            }
            _ => return false,
        }
    }
    true
}
