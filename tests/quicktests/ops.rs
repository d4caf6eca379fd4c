use quickcheck::{Arbitrary, Gen};

/// One step of a random workload, replayed against a tree and a std model
/// of it side by side.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the item to both the tree and the model.
    Add(T),
    /// Remove one copy of the item from both.
    Remove(T),
    /// Check the tree's items against the model: a `BinaryTree`'s general
    /// order must be the model `Vec` in insertion order, a `SearchTree`'s
    /// in-order walk must be the model `BTreeSet` in sorted order.
    Traverse,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Adds come up twice as often as the other steps so the trees grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]) {
            Some(0) => Op::Add(T::arbitrary(g)),
            Some(1) => Op::Remove(T::arbitrary(g)),
            _ => Op::Traverse,
        }
    }
}
