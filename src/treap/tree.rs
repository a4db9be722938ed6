use crate::treap::node::Node;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

/// Merges `r_tree` into `l_tree`. Every key in `l_tree` must be less than or equal to every key
/// in `r_tree`. The root with the higher priority becomes the root of the merged tree.
pub fn merge<T>(l_tree: &mut Tree<T>, r_tree: Tree<T>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Splits `tree` so that it keeps every key less than or equal to `key` and returns a tree with
/// every key greater than `key`.
pub fn split<T>(tree: &mut Tree<T>, key: &T) -> Tree<T>
where
    T: Ord,
{
    match tree.take() {
        Some(mut node) => {
            if node.key <= *key {
                let right = split(&mut node.right, key);
                *tree = Some(node);
                right
            } else {
                let mut left = node.left.take();
                node.left = split(&mut left, key);
                *tree = left;
                Some(node)
            }
        },
        None => None,
    }
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>)
where
    T: Ord,
{
    let right = split(tree, &new_node.key);
    merge(tree, Some(Box::new(new_node)));
    merge(tree, right);
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => return remove(&mut node.left, key),
            Ordering::Greater => return remove(&mut node.right, key),
            Ordering::Equal => {},
        },
        None => return None,
    }

    let Node { key: removed, mut left, right, .. } = *tree.take()?;
    merge(&mut left, right);
    *tree = left;
    Some(removed)
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn len<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(ref node) => len(&node.left) + len(&node.right) + 1,
        None => 0,
    }
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
    match tree {
        Some(ref node) => cmp::max(max_depth(&node.left), max_depth(&node.right)) + 1,
        None => 0,
    }
}

pub fn leaf_depths<T>(tree: &Tree<T>, depth: usize, depths: &mut Vec<usize>) {
    if let Some(ref node) = tree {
        if node.left.is_none() && node.right.is_none() {
            depths.push(depth);
        } else {
            leaf_depths(&node.left, depth + 1, depths);
            leaf_depths(&node.right, depth + 1, depths);
        }
    }
}
