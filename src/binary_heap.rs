//! Array-backed binary max-heap.
//!
//! The heap is an implicit complete binary tree stored in a `Vec`: the children of index `i` are
//! `2i + 1` and `2i + 2` and its parent is `(i - 1) / 2`. Every parent is greater than or equal to
//! its children, so the maximum is always at index zero.
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `peek_max`    | O(1)       |
//! | `extract_max` | O(log n)   |

use crate::error::{Error, Result};
use crate::traits::MaxHeap;
use std::iter::FromIterator;

/// A binary max-heap.
///
/// # Examples
/// ```
/// use ordered_collections::binary_heap::BinaryHeap;
/// use ordered_collections::Error;
///
/// let mut heap = BinaryHeap::new();
/// heap.insert(3);
/// heap.insert(8);
/// heap.insert(5);
///
/// assert_eq!(heap.peek_max(), Ok(&8));
/// assert_eq!(heap.extract_max(), Ok(8));
/// assert_eq!(heap.extract_max(), Ok(5));
/// assert_eq!(heap.extract_max(), Ok(3));
/// assert_eq!(heap.extract_max(), Err(Error::EmptyCollection));
/// ```
#[derive(Clone, Debug)]
pub struct BinaryHeap<T> {
    data: Vec<T>,
}

impl<T> BinaryHeap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinaryHeap<T>`.
    pub fn new() -> Self {
        BinaryHeap { data: Vec::new() }
    }

    /// Constructs a new, empty `BinaryHeap<T>` with space for at least `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a key into the heap.
    pub fn insert(&mut self, key: T) {
        self.data.push(key);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Returns a reference to the greatest key in the heap, or `Error::EmptyCollection` if the
    /// heap is empty.
    pub fn peek_max(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the greatest key in the heap, or `Error::EmptyCollection` if the heap
    /// is empty.
    pub fn extract_max(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::EmptyCollection);
        }

        // the last key fills the vacated root before sifting down
        let max = self.data.swap_remove(0);
        let len = self.data.len();
        self.sift_down(0, len);
        Ok(max)
    }

    /// Returns the number of keys in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clears the heap, removing all keys.
    pub fn clear(&mut self) {
        debug!("clearing binary heap of {} keys", self.data.len());
        self.data.clear();
    }

    /// Consumes the heap and returns the underlying vector in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its keys in non-decreasing order.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::binary_heap::BinaryHeap;
    ///
    /// let heap: BinaryHeap<u32> = vec![5, 3, 8, 1].into_iter().collect();
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down(0, end);
        }
        self.data
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent] < self.data[index] {
                self.data.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    // Only the prefix `data[..end]` is treated as part of the heap.
    fn sift_down(&mut self, mut index: usize, end: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < end && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < end && self.data[right] > self.data[largest] {
                largest = right;
            }

            if largest == index {
                break;
            }
            self.data.swap(index, largest);
            index = largest;
        }
    }
}

impl<T> MaxHeap<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) {
        self.insert(key)
    }

    fn peek_max(&self) -> Result<&T> {
        self.peek_max()
    }

    fn extract_max(&mut self) -> Result<T> {
        self.extract_max()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<T> Extend<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for BinaryHeap<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T> Default for BinaryHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
