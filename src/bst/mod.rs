//! Binary search tree without any rebalancing.

mod node;
mod set;
mod tree;

pub use self::set::{BinarySearchTree, BinarySearchTreeIntoIter, BinarySearchTreeIter};
