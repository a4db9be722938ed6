//! Interfaces shared by the containers of this crate.
//!
//! Both traits mirror the inherent methods of their implementors, so generic code (benchmarks,
//! structural analysis) can be written once for every tree or every heap.

use crate::error::Result;

/// An ordered container supporting insertion, lookup and removal by key.
pub trait SearchTree<T: Ord> {
    /// Inserts `key`, returning `true` if a new node was created.
    fn insert(&mut self, key: T) -> bool;

    /// Returns `true` if `key` is stored in the tree.
    fn search(&self, key: &T) -> bool;

    /// Removes one occurrence of `key`. Removing an absent key is a no-op that returns `None`.
    fn remove(&mut self, key: &T) -> Option<T>;

    /// Returns the number of keys in the tree, counting duplicates.
    fn len(&self) -> usize;

    /// Returns `true` if the tree holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key from the tree.
    fn clear(&mut self);

    /// Returns the number of nodes on the longest root-to-leaf path.
    fn max_depth(&self) -> usize;

    /// Returns the depth of every leaf, from left to right. The root has depth zero.
    fn leaf_depths(&self) -> Vec<usize>;
}

/// A max-priority queue.
pub trait MaxHeap<T: Ord> {
    /// Inserts `key` into the heap.
    fn insert(&mut self, key: T);

    /// Returns a reference to the greatest key, or `Error::EmptyCollection`.
    fn peek_max(&self) -> Result<&T>;

    /// Removes and returns the greatest key, or `Error::EmptyCollection`.
    fn extract_max(&mut self) -> Result<T>;

    /// Returns the number of keys in the heap.
    fn len(&self) -> usize;

    /// Returns `true` if the heap holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every key from the heap.
    fn clear(&mut self);
}
