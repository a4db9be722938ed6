use crate::config::DuplicatePolicy;
use crate::traits::SearchTree;
use crate::treap::node::Node;
use crate::treap::tree;
use rand::{self, Rand, Rng, SeedableRng, XorShiftRng};
use std::fmt;
use std::iter::FromIterator;

/// An ordered multiset implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. Keys in the left subtree of a node are less than or equal to the
/// node's key and keys in the right subtree are greater than or equal to it. The priority of a
/// node is greater than or equal to the priority of all nodes in its subtrees. By randomly
/// generating priorities, the expected height of the tree is proportional to the logarithm of the
/// number of keys.
///
/// Every mutation is expressed with two primitives: splitting a tree by key and merging two trees
/// whose key ranges do not overlap. Priorities are drawn from the random source the treap was
/// constructed with, so a seeded source gives a reproducible tree shape.
///
/// Unlike the other trees in this crate, a treap stores duplicate keys by default.
///
/// # Examples
/// ```
/// use ordered_collections::treap::Treap;
///
/// let mut t = Treap::with_seed([1, 2, 3, 4]);
/// t.insert(0);
/// t.insert(3);
/// t.insert(3);
///
/// assert_eq!(t.len(), 3);
/// assert!(t.search(&3));
///
/// assert_eq!(t.remove(&3), Some(3));
/// assert_eq!(t.remove(&1), None);
/// assert_eq!(t.len(), 2);
/// ```
#[derive(Clone)]
pub struct Treap<T, R = XorShiftRng> {
    root: tree::Tree<T>,
    rng: R,
    len: usize,
    policy: DuplicatePolicy,
}

impl<T> Treap<T>
where
    T: Ord,
{
    /// Constructs a new, empty `Treap<T>` whose priorities come from a randomly seeded
    /// `XorShiftRng`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    ///
    /// let t: Treap<u32> = Treap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_rng(rand::weak_rng())
    }

    /// Constructs a new, empty `Treap<T>` whose priorities come from an `XorShiftRng` seeded with
    /// `seed`. Two treaps built with the same seed and the same operations have the same shape.
    ///
    /// # Panics
    /// Panics if `seed` is all zeros.
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Self::with_rng(XorShiftRng::from_seed(seed))
    }

    /// Constructs a new, empty `Treap<T>` with a duplicate key policy whose priorities come from
    /// a randomly seeded `XorShiftRng`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    /// use ordered_collections::DuplicatePolicy;
    ///
    /// let mut t = Treap::with_policy(DuplicatePolicy::Reject);
    /// assert!(t.insert(1));
    /// assert!(!t.insert(1));
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self::with_rng_and_policy(rand::weak_rng(), policy)
    }
}

impl<T, R> Treap<T, R>
where
    T: Ord,
    R: Rng,
{
    /// Constructs a new, empty treap that draws priorities from `rng`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    /// use rand::{SeedableRng, StdRng};
    ///
    /// let rng: StdRng = SeedableRng::from_seed(&[1, 2, 3, 4][..]);
    /// let mut t = Treap::with_rng(rng);
    /// t.insert(1);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self::with_rng_and_policy(rng, DuplicatePolicy::Allow)
    }

    /// Constructs a new, empty treap with a duplicate key policy that draws priorities from `rng`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    /// use ordered_collections::DuplicatePolicy;
    /// use rand::{SeedableRng, XorShiftRng};
    ///
    /// let rng = XorShiftRng::from_seed([1, 2, 3, 4]);
    /// let mut t = Treap::with_rng_and_policy(rng, DuplicatePolicy::Reject);
    /// assert!(t.insert(1));
    /// assert!(!t.insert(1));
    /// ```
    pub fn with_rng_and_policy(rng: R, policy: DuplicatePolicy) -> Self {
        Treap {
            root: None,
            rng,
            len: 0,
            policy,
        }
    }

    /// Returns the duplicate key policy of the treap.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Inserts a key into the treap with a freshly drawn priority. Returns `false` only if the key
    /// already exists and the treap rejects duplicates.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// assert!(t.insert(1));
    /// assert!(t.insert(1));
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        if !self.policy.allows_duplicates() && tree::contains(&self.root, &key) {
            return false;
        }
        let Treap { ref mut root, ref mut rng, ref mut len, .. } = self;
        tree::insert(root, Node::new(key, rng.next_u32()));
        *len += 1;
        true
    }

    /// Removes one occurrence of a key from the treap. If the key exists in the treap, it will
    /// return the removed key. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1);
    /// assert_eq!(t.remove(&1), Some(1));
    /// assert_eq!(t.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let Treap { ref mut root, ref mut len, .. } = self;
        tree::remove(root, key).map(|key| {
            *len -= 1;
            key
        })
    }

    /// Checks if a key exists in the treap.
    pub fn search(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the number of keys in the treap, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the treap is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the treap, removing all keys.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum key of the treap. Returns `None` if the treap is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the treap. Returns `None` if the treap is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn max_depth(&self) -> usize {
        tree::max_depth(&self.root)
    }

    /// Returns the depth of each leaf from left to right, where the root has depth zero.
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        tree::leaf_depths(&self.root, 0, &mut depths);
        depths
    }

    /// Moves every key of `other` into the treap, leaving `other` empty. If every key of the
    /// treap is at most every key of `other`, the two trees are merged directly. Otherwise the
    /// keys of `other` are inserted one at a time.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    ///
    /// let mut t: Treap<u32> = (0..3).collect();
    /// let mut other: Treap<u32> = (3..6).collect();
    /// t.append(&mut other);
    ///
    /// assert_eq!(t.len(), 6);
    /// assert!(other.is_empty());
    /// ```
    pub fn append<S>(&mut self, other: &mut Treap<T, S>) {
        // A treap that allows duplicates may hold equal keys that this treap has to drop.
        let compatible = self.policy.allows_duplicates() || !other.policy.allows_duplicates();
        let disjoint = compatible
            && match (tree::max(&self.root), tree::min(&other.root)) {
                (Some(max), Some(min)) => {
                    max < min || (self.policy.allows_duplicates() && max == min)
                },
                _ => true,
            };

        let other_root = other.root.take();
        other.len = 0;
        if disjoint {
            self.len += tree::len(&other_root);
            tree::merge(&mut self.root, other_root);
        } else {
            debug!("appending overlapping treaps by reinsertion");
            let iter = TreapIntoIter {
                current: other_root,
                stack: Vec::new(),
            };
            for key in iter {
                self.insert(key);
            }
        }
    }

    /// Returns an iterator over the treap. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(3);
    /// t.insert(1);
    /// t.insert(3);
    ///
    /// assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&1, &3, &3]);
    /// ```
    pub fn iter(&self) -> TreapIter<T> {
        TreapIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T, R> Treap<T, R>
where
    T: Ord,
    R: Rng + Rand,
{
    /// Splits the treap in two. Keys greater than `key` are moved into the returned treap, which
    /// draws its priorities from a generator seeded by this treap's generator.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::treap::Treap;
    ///
    /// let mut t: Treap<u32> = (0..10).collect();
    /// let upper = t.split_off(&4);
    ///
    /// assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&0, &1, &2, &3, &4]);
    /// assert_eq!(upper.len(), 5);
    /// assert_eq!(upper.min(), Some(&5));
    /// ```
    pub fn split_off(&mut self, key: &T) -> Self {
        let right = tree::split(&mut self.root, key);
        let right_len = tree::len(&right);
        self.len -= right_len;
        Treap {
            root: right,
            rng: self.rng.gen::<R>(),
            len: right_len,
            policy: self.policy,
        }
    }
}

impl<T, R> SearchTree<T> for Treap<T, R>
where
    T: Ord,
    R: Rng,
{
    fn insert(&mut self, key: T) -> bool {
        self.insert(key)
    }

    fn search(&self, key: &T) -> bool {
        self.search(key)
    }

    fn remove(&mut self, key: &T) -> Option<T> {
        self.remove(key)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        self.clear()
    }

    fn max_depth(&self) -> usize {
        self.max_depth()
    }

    fn leaf_depths(&self) -> Vec<usize> {
        self.leaf_depths()
    }
}

impl<T, R> IntoIterator for Treap<T, R>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = TreapIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, R> IntoIterator for &'a Treap<T, R>
where
    T: 'a + Ord,
    R: Rng,
{
    type Item = &'a T;
    type IntoIter = TreapIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `Treap<T, R>`.
///
/// This iterator traverses the elements of the treap in-order and yields owned keys.
pub struct TreapIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for TreapIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `Treap<T, R>`.
///
/// This iterator traverses the elements of the treap in-order and yields immutable references.
pub struct TreapIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for TreapIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = *self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T, R> Extend<T> for Treap<T, R>
where
    T: Ord,
    R: Rng,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for Treap<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut treap = Self::new();
        treap.extend(iter);
        treap
    }
}

impl<T, R> fmt::Debug for Treap<T, R>
where
    T: Ord + fmt::Debug,
    R: Rng,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for Treap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
