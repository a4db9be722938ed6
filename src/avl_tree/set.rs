use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::config::DuplicatePolicy;
use crate::traits::SearchTree;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. After every insertion and
/// removal the nodes on the path back to the root are rebalanced with rotations, so the height of
/// the tree stays logarithmic in the number of keys.
///
/// # Examples
/// ```
/// use ordered_collections::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in 0..7 {
///     tree.insert(key);
/// }
///
/// assert!(tree.search(&3));
/// assert_eq!(tree.height(), 3);
///
/// assert_eq!(tree.remove(&3), Some(3));
/// assert_eq!(tree.remove(&4), None);
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    root: tree::Tree<T>,
    len: usize,
    policy: DuplicatePolicy,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>` that ignores duplicate keys.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Reject)
    }

    /// Constructs a new, empty `AvlTree<T>` with a particular duplicate key policy.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlTree;
    /// use ordered_collections::DuplicatePolicy;
    ///
    /// let mut tree = AvlTree::with_policy(DuplicatePolicy::Allow);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        AvlTree {
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
    /// use ordered_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let AvlTree { ref mut root, ref mut len, policy } = self;
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
    /// use ordered_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let AvlTree { ref mut root, ref mut len, .. } = self;
        tree::remove(root, key).map(|key| {
            *len -= 1;
            key
        })
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
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
        self.root = None;
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

    /// Returns the height of the tree as stored in the root node.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. This is computed
    /// by walking the tree and always agrees with `height`.
    pub fn max_depth(&self) -> usize {
        tree::max_depth(&self.root)
    }

    /// Returns the depth of each leaf from left to right, where the root has depth zero.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in 0..4 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.leaf_depths(), vec![1, 2]);
    /// ```
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        tree::leaf_depths(&self.root, 0, &mut depths);
        depths
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<T> {
        AvlTreeIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T> SearchTree<T> for AvlTree<T>
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

impl<T> IntoIterator for AvlTree<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned keys.
pub struct AvlTreeIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlTreeIntoIter<T> {
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

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
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

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;
    use crate::config::DuplicatePolicy;

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.max_depth(), 0);
        assert!(tree.leaf_depths().is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(1));
        assert!(!tree.insert(1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1]);
    }

    #[test]
    fn test_insert_allows_duplicates() {
        let mut tree = AvlTree::with_policy(DuplicatePolicy::Allow);
        tree.insert(2);
        tree.insert(1);
        tree.insert(2);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &2]);

        assert_eq!(tree.remove(&2), Some(2));
        assert!(tree.search(&2));
        assert_eq!(tree.remove(&2), Some(2));
        assert!(!tree.search(&2));
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        assert_eq!(tree.remove(&2), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_sorted_insert_stays_balanced() {
        let mut tree = AvlTree::new();
        for key in 0..1023 {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 10);
        assert_eq!(tree.max_depth(), 10);
        assert!(tree.leaf_depths().iter().all(|depth| *depth == 9));
    }

    #[test]
    fn test_mixed_insert_order() {
        let mut tree = AvlTree::new();
        for key in &[5, 3, 8, 1, 4, 7, 9] {
            tree.insert(*key);
        }
        assert_eq!(tree.max_depth(), 3);
        assert_eq!(
            tree.iter().collect::<Vec<&u32>>(),
            vec![&1, &3, &4, &5, &7, &8, &9],
        );
    }

    #[test]
    fn test_min_max() {
        let tree: AvlTree<u32> = vec![5, 3, 8, 1].into_iter().collect();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&8));
    }

    #[test]
    fn test_clear() {
        let mut tree: AvlTree<u32> = (0..5).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert!(!tree.search(&3));
    }

    #[test]
    fn test_into_iter() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.insert(5);
        tree.insert(3);

        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_clone_and_debug() {
        let mut tree: AvlTree<u32> = (0..7).collect();
        let copy = tree.clone();
        tree.remove(&3);

        assert_eq!(copy.len(), 7);
        assert_eq!(copy.height(), 3);
        assert!(copy.search(&3));
        assert_eq!(format!("{:?}", tree), "{0, 1, 2, 4, 5, 6}");
    }
}
