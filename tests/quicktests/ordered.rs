use leveltree::{Node, Order, SearchTree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Checks every item of the subtree lies strictly between `low` and `high`.
fn bounded<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
    match node {
        None => true,
        Some(n) => {
            let item = n.item();
            low.map_or(true, |low| low < item)
                && high.map_or(true, |high| item < high)
                && bounded(n.left(), low, Some(item))
                && bounded(n.right(), Some(item), high)
        }
    }
}

fn is_search_tree<T: Ord>(tree: &SearchTree<T>) -> bool {
    bounded(tree.root_node(), None, None)
}

fn sorted<T: Copy>(tree: &SearchTree<T>) -> Vec<T> {
    tree.items(Order::Inorder).into_iter().copied().collect()
}

#[quickcheck]
fn ordered_after_adds(xs: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();
    let set: BTreeSet<_> = xs.into_iter().collect();

    is_search_tree(&tree)
        && tree.len() == set.len()
        && sorted(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = SearchTree::new();
    let mut set = BTreeSet::new();

    for op in &ops {
        let agrees = match *op {
            Op::Add(x) => tree.add(x) == set.insert(x),
            Op::Remove(x) => tree.remove(&x) == set.remove(&x),
            Op::Traverse => sorted(&tree) == set.iter().copied().collect::<Vec<_>>(),
        };
        if !agrees || !is_search_tree(&tree) {
            return false;
        }
    }

    set.iter().all(|x| tree.get(x) == Ok(x)) && tree.len() == set.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: SearchTree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: SearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs.iter().filter(|x| !deletes.contains(x));

    is_search_tree(&tree)
        && deletes.iter().all(|x| !tree.contains(x))
        && still_present.all(|x| tree.contains(x))
}
