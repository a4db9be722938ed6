use ordered_collections::avl_tree::AvlTree;
use ordered_collections::binary_heap::BinaryHeap;
use ordered_collections::binomial_heap::BinomialHeap;
use ordered_collections::bst::BinarySearchTree;
use ordered_collections::treap::Treap;
use ordered_collections::DuplicatePolicy;
use quickcheck_macros::quickcheck;
use rand::{SeedableRng, XorShiftRng};

fn sorted(mut xs: Vec<i16>) -> Vec<i16> {
    xs.sort();
    xs
}

fn sorted_dedup(xs: Vec<i16>) -> Vec<i16> {
    let mut xs = sorted(xs);
    xs.dedup();
    xs
}

#[quickcheck]
fn bst_in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<i16> = xs.iter().cloned().collect();
    tree.into_iter().collect::<Vec<i16>>() == sorted_dedup(xs)
}

#[quickcheck]
fn bst_allow_duplicates_keeps_multiplicity(xs: Vec<i16>) -> bool {
    let mut tree = BinarySearchTree::with_policy(DuplicatePolicy::Allow);
    tree.extend(xs.iter().cloned());
    tree.into_iter().collect::<Vec<i16>>() == sorted(xs)
}

#[quickcheck]
fn avl_in_order_is_sorted(xs: Vec<i16>) -> bool {
    let tree: AvlTree<i16> = xs.iter().cloned().collect();
    tree.into_iter().collect::<Vec<i16>>() == sorted_dedup(xs)
}

#[quickcheck]
fn avl_height_is_logarithmic(xs: Vec<i16>, removals: Vec<i16>) -> bool {
    let mut tree: AvlTree<i16> = xs.into_iter().collect();
    for key in &removals {
        tree.remove(key);
    }
    let bound = (1.44 * ((tree.len() + 2) as f64).log2()).ceil() as usize;
    tree.height() <= bound
}

#[quickcheck]
fn treap_in_order_keeps_duplicates(xs: Vec<i16>) -> bool {
    let mut treap = Treap::with_seed([1, 2, 3, 4]);
    treap.extend(xs.iter().cloned());
    treap.into_iter().collect::<Vec<i16>>() == sorted(xs)
}

#[quickcheck]
fn insert_then_remove_restores_search(xs: Vec<i16>, key: i16) -> bool {
    let mut bst: BinarySearchTree<i16> = xs.iter().cloned().collect();
    let mut avl: AvlTree<i16> = xs.iter().cloned().collect();
    let mut treap = Treap::with_rng_and_policy(XorShiftRng::from_seed([1, 2, 3, 4]), DuplicatePolicy::Reject);
    treap.extend(xs.iter().cloned());

    bst.insert(key);
    bst.remove(&key);
    avl.insert(key);
    avl.remove(&key);
    treap.insert(key);
    treap.remove(&key);

    let others_kept = xs
        .iter()
        .filter(|x| **x != key)
        .all(|x| bst.search(x) && avl.search(x) && treap.search(x));
    others_kept && !bst.search(&key) && !avl.search(&key) && !treap.search(&key)
}

#[quickcheck]
fn heaps_extract_in_non_increasing_order(xs: Vec<i16>) -> bool {
    let mut binary: BinaryHeap<i16> = xs.iter().cloned().collect();
    let mut binomial: BinomialHeap<i16> = xs.iter().cloned().collect();
    let mut expected = sorted(xs);
    expected.reverse();

    let mut from_binary = Vec::new();
    while let Ok(key) = binary.extract_max() {
        from_binary.push(key);
    }
    let mut from_binomial = Vec::new();
    while let Ok(key) = binomial.extract_max() {
        from_binomial.push(key);
    }
    from_binary == expected && from_binomial == expected
}

#[quickcheck]
fn binomial_roots_match_set_bits(xs: Vec<i16>) -> bool {
    let heap: BinomialHeap<i16> = xs.into_iter().collect();
    heap.root_degrees().len() == heap.len().count_ones() as usize
}
