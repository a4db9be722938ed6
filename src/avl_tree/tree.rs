use crate::avl_tree::node::Node;
use crate::config::DuplicatePolicy;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// The rotation case is chosen from the balance of the node and of its heavier child, so the same
// rules repair imbalance caused by insertion and by removal.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                trace!("avl left-right rotation");
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        trace!("avl right rotation");
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                trace!("avl right-left rotation");
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        trace!("avl left rotation");
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let min = remove_min(&mut node.left);
            balance(tree);
            return min;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>, policy: DuplicatePolicy) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match new_node.key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, new_node, policy),
            Ordering::Greater => insert(&mut node.right, new_node, policy),
            Ordering::Equal => {
                if !policy.allows_duplicates() {
                    return false;
                }
                insert(&mut node.right, new_node, policy)
            },
        },
        None => {
            *tree = Some(Box::new(new_node));
            return true;
        },
    };

    balance(tree);
    inserted
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node { key, left, right, .. } = *node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(key)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
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
