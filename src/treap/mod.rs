//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod node;
mod set;
mod tree;

pub use self::set::{Treap, TreapIntoIter, TreapIter};
