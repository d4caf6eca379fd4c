//! Property tests comparing the trees against simple std models.

mod complete;
mod ops;
mod ordered;

pub(crate) use ops::Op;
