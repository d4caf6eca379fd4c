use leveltree::{BinaryTree, Node, Order};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::Op;

/// `⌈lg(n + 1)⌉`, the height of a level-complete tree with `n` nodes.
fn complete_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

fn general<T: Copy>(tree: &BinaryTree<T>) -> Vec<T> {
    tree.items(Order::General).into_iter().copied().collect()
}

/// Records the horizontal position of every node `depth` levels below `node`.
fn positions_at<T>(node: Option<&Node<T>>, depth: usize, pos: usize, out: &mut Vec<usize>) {
    if let Some(n) = node {
        if depth == 0 {
            out.push(pos);
        } else {
            positions_at(n.left(), depth - 1, pos * 2, out);
            positions_at(n.right(), depth - 1, pos * 2 + 1, out);
        }
    }
}

/// Every level but the last is full. The last level fills each half of the
/// tree from the left, and the left half is never behind or more than one
/// node ahead of the right half.
fn is_level_complete<T>(tree: &BinaryTree<T>) -> bool {
    let height = tree.height();
    let root = tree.root_node();

    for depth in 0..height.saturating_sub(1) {
        let mut level = Vec::new();
        positions_at(root, depth, 0, &mut level);
        if level.len() != 1 << depth {
            return false;
        }
    }

    if height < 2 {
        return true;
    }
    let root = root.unwrap();
    let mut left = Vec::new();
    let mut right = Vec::new();
    positions_at(root.left(), height - 2, 0, &mut left);
    positions_at(root.right(), height - 2, 0, &mut right);

    let contiguous = |slots: &[usize]| slots.iter().copied().eq(0..slots.len());
    contiguous(&left[..])
        && contiguous(&right[..])
        && (left.len() == right.len() || left.len() == right.len() + 1)
}

#[quickcheck]
fn len_and_height(xs: Vec<i8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();
    tree.len() == xs.len() && tree.height() == complete_height(xs.len())
}

#[quickcheck]
fn general_order_is_insertion_order(xs: Vec<i8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();
    general(&tree) == xs
}

#[quickcheck]
fn level_complete_after_adds(xs: Vec<u8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in xs {
        tree.add(x);
        if !is_level_complete(&tree) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn add_then_remove_restores(xs: Vec<i8>, x: i8) -> TestResult {
    if xs.contains(&x) {
        return TestResult::discard();
    }
    let mut tree: BinaryTree<_> = xs.into_iter().collect();
    let before = tree.clone();

    tree.add(x);
    let removed = tree.remove(&x);
    TestResult::from_bool(removed && tree == before)
}

#[quickcheck]
fn remove_absent_is_noop(xs: Vec<i8>, x: i8) -> TestResult {
    if xs.contains(&x) {
        return TestResult::discard();
    }
    let mut tree: BinaryTree<_> = xs.into_iter().collect();
    let before = tree.clone();

    TestResult::from_bool(!tree.remove(&x) && tree == before)
}

#[quickcheck]
fn matches_reference_construction(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinaryTree::new();
    let mut model: Vec<i8> = Vec::new();

    for op in &ops {
        match *op {
            Op::Add(x) => {
                if !tree.add(x) {
                    return false;
                }
                model.push(x);
            }
            Op::Remove(x) => {
                let expected = match model.iter().position(|m| *m == x) {
                    Some(i) => {
                        model.remove(i);
                        true
                    }
                    None => false,
                };
                if tree.remove(&x) != expected {
                    return false;
                }
            }
            Op::Traverse => {
                if general(&tree) != model {
                    return false;
                }
            }
        }
        if !is_level_complete(&tree) {
            return false;
        }
    }

    // Same shape and items as building from scratch.
    let reference: BinaryTree<_> = model.iter().copied().collect();
    tree == reference && model.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, extra: i8) -> bool {
    let original: BinaryTree<_> = xs.iter().copied().collect();
    let mut copy = original.clone();
    let same = copy.items(Order::Preorder) == original.items(Order::Preorder)
        && copy.items(Order::Linear) == original.items(Order::Linear);

    copy.add(extra);
    if let Some(first) = xs.first() {
        copy.remove(first);
    }
    same && general(&original) == xs
}
