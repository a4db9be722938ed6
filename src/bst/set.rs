use crate::bst::node::Node;
use crate::bst::tree;
use crate::config::DuplicatePolicy;
use crate::traits::SearchTree;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Every key in the left subtree of a node is less than the node's key and every key in the right
/// subtree is greater. No rebalancing is performed, so the depth of the tree depends on the order
/// in which keys are inserted.
///
/// # Examples
/// ```
/// use ordered_collections::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(5);
/// tree.insert(3);
/// tree.insert(8);
///
/// assert!(tree.search(&3));
/// assert_eq!(tree.max_depth(), 2);
///
/// assert_eq!(tree.remove(&3), Some(3));
/// assert_eq!(tree.remove(&4), None);
/// ```
pub struct BinarySearchTree<T> {
    root: tree::Tree<T>,
    len: usize,
    policy: DuplicatePolicy,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>` that ignores duplicate keys.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Reject)
    }

    /// Constructs a new, empty `BinarySearchTree<T>` with a particular duplicate key policy.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    /// use ordered_collections::DuplicatePolicy;
    ///
    /// let mut tree = BinarySearchTree::with_policy(DuplicatePolicy::Allow);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        BinarySearchTree {
            root: None,
            len: 0,
            policy,
        }
    }

    /// Returns the duplicate key policy of the tree.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Inserts a key into the tree. Returns `false` if the key already exists and the tree
    /// rejects duplicates.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let BinarySearchTree { ref mut root, ref mut len, policy } = self;
        let inserted = tree::insert(root, Node::new(key), *policy);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Removes a key from the tree. If the key exists in the tree, it will return the removed
    /// key. Otherwise the tree is left unchanged and `None` is returned.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let BinarySearchTree { ref mut root, ref mut len, .. } = self;
        tree::remove(root, key).map(|key| {
            *len -= 1;
            key
        })
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert!(!tree.search(&0));
    /// assert!(tree.search(&1));
    /// ```
    pub fn search(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
        self.len = 0;
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.max_depth(), 0);
    /// for key in 0..4 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.max_depth(), 4);
    /// ```
    pub fn max_depth(&self) -> usize {
        tree::max_depth(&self.root)
    }

    /// Returns the depth of each leaf from left to right, where the root has depth zero.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// tree.insert(4);
    /// assert_eq!(tree.leaf_depths(), vec![1, 2]);
    /// ```
    pub fn leaf_depths(&self) -> Vec<usize> {
        tree::leaf_depths(&self.root)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BinarySearchTreeIter<T> {
        BinarySearchTreeIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T> SearchTree<T> for BinarySearchTree<T>
where
    T: Ord,
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

impl<T> IntoIterator for BinarySearchTree<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = BinarySearchTreeIntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = BinarySearchTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned keys.
pub struct BinarySearchTreeIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for BinarySearchTreeIntoIter<T> {
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

impl<T> Drop for BinarySearchTreeIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for mut node in self.stack.drain(..) {
            tree::clear(&mut node.right);
        }
    }
}

/// An iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct BinarySearchTreeIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for BinarySearchTreeIter<'a, T>
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

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: tree::clone(&self.root),
            len: self.len,
            policy: self.policy,
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
