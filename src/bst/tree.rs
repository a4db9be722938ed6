use crate::bst::node::Node;
use crate::config::DuplicatePolicy;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

// Every operation walks the tree with a cursor instead of recursing, since an unbalanced tree
// built from a sorted run is as deep as it is long.

pub fn insert<T>(mut tree: &mut Tree<T>, new_node: Node<T>, policy: DuplicatePolicy) -> bool
where
    T: Ord,
{
    while let Some(node) = tree {
        tree = match new_node.key.cmp(&node.key) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => {
                if !policy.allows_duplicates() {
                    return false;
                }
                &mut node.right
            },
        };
    }
    *tree = Some(Box::new(new_node));
    true
}

fn remove_min<T>(mut tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    while tree.as_ref()?.left.is_some() {
        tree = &mut tree.as_mut()?.left;
    }
    let mut node = tree.take()?;
    *tree = node.right.take();
    Some(node)
}

pub fn remove<T>(mut tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    loop {
        match key.cmp(&tree.as_ref()?.key) {
            Ordering::Less => tree = &mut tree.as_mut()?.left,
            Ordering::Greater => tree = &mut tree.as_mut()?.right,
            Ordering::Equal => break,
        }
    }

    let Node { key: removed, left, right } = *tree.take()?;
    *tree = match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (left, mut right) => match remove_min(&mut right) {
            // the in-order successor takes the place of the removed node
            Some(mut successor) => {
                successor.left = left;
                successor.right = right;
                Some(successor)
            },
            None => left,
        },
    };
    Some(removed)
}

pub fn contains<T>(mut tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    while let Some(ref node) = tree {
        tree = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

/// Takes the tree apart one node at a time so that dropping a deep tree does not recurse.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Copies the tree node for node, building each subtree after both of its children.
pub fn clone<T>(tree: &Tree<T>) -> Tree<T>
where
    T: Clone,
{
    let mut pending: Vec<(Option<&Node<T>>, bool)> = vec![(tree.as_ref().map(|node| &**node), false)];
    let mut built: Vec<Tree<T>> = Vec::new();

    while let Some((node_opt, children_built)) = pending.pop() {
        match node_opt {
            None => built.push(None),
            Some(node) if children_built => {
                let right = built.pop().unwrap_or(None);
                let left = built.pop().unwrap_or(None);
                built.push(Some(Box::new(Node {
                    key: node.key.clone(),
                    left,
                    right,
                })));
            },
            Some(node) => {
                pending.push((Some(node), true));
                pending.push((node.right.as_ref().map(|child| &**child), false));
                pending.push((node.left.as_ref().map(|child| &**child), false));
            },
        }
    }

    built.pop().unwrap_or(None)
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn max_depth<T>(tree: &Tree<T>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = tree.iter().map(|node| (&**node, 1)).collect();
    let mut depth = 0;
    while let Some((node, node_depth)) = stack.pop() {
        depth = cmp::max(depth, node_depth);
        for child in node.left.iter().chain(node.right.iter()) {
            stack.push((&**child, node_depth + 1));
        }
    }
    depth
}

pub fn leaf_depths<T>(tree: &Tree<T>) -> Vec<usize> {
    let mut stack: Vec<(&Node<T>, usize)> = tree.iter().map(|node| (&**node, 0)).collect();
    let mut depths = Vec::new();
    while let Some((node, depth)) = stack.pop() {
        if node.left.is_none() && node.right.is_none() {
            depths.push(depth);
        }
        // right is pushed first so that leaves come out from left to right
        for child in node.right.iter().chain(node.left.iter()) {
            stack.push((&**child, depth + 1));
        }
    }
    depths
}

#[cfg(test)]
mod tests {
    use super::{clear, clone, insert, leaf_depths, max_depth, remove, Tree};
    use crate::bst::node::Node;
    use crate::config::DuplicatePolicy;

    fn is_ordered<T: Ord>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> bool {
        match tree {
            Some(ref node) => {
                lower.map_or(true, |lower| *lower <= node.key)
                    && upper.map_or(true, |upper| node.key <= *upper)
                    && is_ordered(&node.left, lower, Some(&node.key))
                    && is_ordered(&node.right, Some(&node.key), upper)
            },
            None => true,
        }
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = None;
        for key in &[5, 3, 8, 7, 9, 6] {
            insert(&mut tree, Node::new(*key), DuplicatePolicy::Reject);
        }

        assert_eq!(remove(&mut tree, &5), Some(5));
        assert_eq!(tree.as_ref().map(|node| node.key), Some(6));
        assert!(is_ordered(&tree, None, None));
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        let mut tree = None;
        for key in &[5, 3, 1, 8] {
            insert(&mut tree, Node::new(*key), DuplicatePolicy::Reject);
        }

        assert_eq!(remove(&mut tree, &3), Some(3));
        assert_eq!(remove(&mut tree, &8), Some(8));
        assert_eq!(remove(&mut tree, &8), None);
        assert!(is_ordered(&tree, None, None));
        assert_eq!(tree.as_ref().and_then(|node| node.left.as_ref()).map(|node| node.key), Some(1));
    }

    #[test]
    fn test_duplicates_go_right() {
        let mut tree = None;
        assert!(insert(&mut tree, Node::new(2), DuplicatePolicy::Allow));
        assert!(insert(&mut tree, Node::new(2), DuplicatePolicy::Allow));
        assert!(!insert(&mut tree, Node::new(2), DuplicatePolicy::Reject));

        let root = tree.as_ref().unwrap();
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().map(|node| node.key), Some(2));
        assert!(is_ordered(&tree, None, None));
    }

    #[test]
    fn test_clone_keeps_shape() {
        let mut tree = None;
        for key in &[5, 3, 8, 1, 4, 9, 10] {
            insert(&mut tree, Node::new(*key), DuplicatePolicy::Reject);
        }

        let copy = clone(&tree);
        assert!(is_ordered(&copy, None, None));
        assert_eq!(max_depth(&copy), max_depth(&tree));
        assert_eq!(leaf_depths(&copy), vec![2, 2, 3]);
        assert_eq!(copy.as_ref().map(|node| node.key), Some(5));
    }

    #[test]
    fn test_deep_chain() {
        let mut tree = None;
        for key in 0..10_000 {
            insert(&mut tree, Node::new(key), DuplicatePolicy::Reject);
        }
        assert_eq!(max_depth(&tree), 10_000);
        assert_eq!(leaf_depths(&tree), vec![9_999]);
        assert_eq!(remove(&mut tree, &9_999), Some(9_999));
        assert_eq!(remove(&mut tree, &0), Some(0));

        clear(&mut tree);
        assert!(tree.is_none());
    }
}
