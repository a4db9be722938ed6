use crate::binomial_heap::node::Node;
use crate::error::{Error, Result};
use crate::traits::MaxHeap;
use std::iter::FromIterator;
use std::mem;

// Enough slots for a degree of every tree in a heap whose size fits in a `u64`.
const DEGREE_TABLE_SIZE: usize = 64;

/// A max-heap implemented by a binomial heap.
///
/// # Examples
/// ```
/// use ordered_collections::binomial_heap::BinomialHeap;
/// use ordered_collections::Error;
///
/// let mut heap = BinomialHeap::new();
/// for key in 0..7 {
///     heap.insert(key);
/// }
///
/// assert_eq!(heap.root_degrees(), vec![0, 1, 2]);
/// assert_eq!(heap.peek_max(), Ok(&6));
/// assert_eq!(heap.extract_max(), Ok(6));
/// assert_eq!(heap.root_degrees(), vec![1, 2]);
///
/// heap.clear();
/// assert_eq!(heap.extract_max(), Err(Error::EmptyCollection));
/// ```
#[derive(Clone, Debug)]
pub struct BinomialHeap<T> {
    roots: Vec<Node<T>>,
    len: usize,
}

impl<T> BinomialHeap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinomialHeap<T>`.
    pub fn new() -> Self {
        BinomialHeap {
            roots: Vec::new(),
            len: 0,
        }
    }

    /// Inserts a key into the heap by prepending a single node tree to the root list and
    /// consolidating.
    pub fn insert(&mut self, key: T) {
        self.roots.insert(0, Node::new(key));
        self.len += 1;
        self.consolidate();
    }

    /// Returns a reference to the greatest key in the heap, or `Error::EmptyCollection` if the
    /// heap is empty.
    pub fn peek_max(&self) -> Result<&T> {
        self.roots
            .iter()
            .map(|root| &root.key)
            .max()
            .ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the greatest key in the heap, or `Error::EmptyCollection` if the heap
    /// is empty.
    pub fn extract_max(&mut self) -> Result<T> {
        let index = self
            .roots
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.key.cmp(&b.key))
            .map(|(index, _)| index)
            .ok_or(Error::EmptyCollection)?;

        let Node { key, children } = self.roots.remove(index);
        let remainder = mem::replace(&mut self.roots, children);
        self.roots.extend(remainder);
        self.len -= 1;
        self.consolidate();
        Ok(key)
    }

    /// Moves every key of `other` into the heap, leaving `other` empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::binomial_heap::BinomialHeap;
    ///
    /// let mut heap: BinomialHeap<u32> = (0..3).collect();
    /// let mut other: BinomialHeap<u32> = (3..8).collect();
    /// heap.append(&mut other);
    ///
    /// assert_eq!(heap.len(), 8);
    /// assert_eq!(heap.root_degrees(), vec![3]);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut BinomialHeap<T>) {
        debug!("appending binomial heap of {} keys to heap of {} keys", other.len, self.len);
        self.roots.append(&mut other.roots);
        self.len += other.len;
        other.len = 0;
        self.consolidate();
    }

    /// Returns the number of keys in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the heap, removing all keys.
    pub fn clear(&mut self) {
        debug!("clearing binomial heap of {} keys", self.len);
        self.roots.clear();
        self.len = 0;
    }

    /// Returns the degree of every tree in the root list in increasing order.
    pub fn root_degrees(&self) -> Vec<usize> {
        self.roots.iter().map(|root| root.degree()).collect()
    }

    fn consolidate(&mut self) {
        let mut table: Vec<Option<Node<T>>> = (0..DEGREE_TABLE_SIZE).map(|_| None).collect();
        for mut root in self.roots.drain(..) {
            let mut degree = root.degree();
            while let Some(other) = table[degree].take() {
                trace!("linking binomial trees of degree {}", degree);
                root = root.link(other);
                degree += 1;
            }
            table[degree] = Some(root);
        }
        self.roots = table.into_iter().flatten().collect();
    }
}

impl<T> MaxHeap<T> for BinomialHeap<T>
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

impl<T> Extend<T> for BinomialHeap<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for BinomialHeap<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T> Default for BinomialHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
