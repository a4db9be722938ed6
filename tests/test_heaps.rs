const NUM_OF_OPERATIONS: usize = 10_000;

macro_rules! max_heap_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use ordered_collections::$module_name::$type_name;
                use ordered_collections::{Error, MaxHeap};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                #[test]
                fn int_test_heap() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut heap = $type_name::new();
                    let mut expected = std::collections::BinaryHeap::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        if rng.gen_range(0, 3) == 0 {
                            assert_eq!(heap.extract_max().ok(), expected.pop());
                        } else {
                            let key = rng.gen_range(0, 1_000u32);
                            heap.insert(key);
                            expected.push(key);
                        }
                        assert_eq!(heap.len(), expected.len());
                        assert_eq!(heap.peek_max().ok(), expected.peek());
                    }
                }

                #[test]
                fn int_test_extract_sorted() {
                    let mut heap = $type_name::new();
                    for key in &[5, 3, 8, 1, 4, 7, 9] {
                        heap.insert(*key);
                    }
                    let mut actual = Vec::new();
                    while !heap.is_empty() {
                        actual.push(heap.extract_max().unwrap());
                    }
                    assert_eq!(actual, vec![9, 8, 7, 5, 4, 3, 1]);
                    assert_eq!(heap.extract_max(), Err(Error::EmptyCollection));
                }

                #[test]
                fn int_test_clear_through_trait() {
                    fn fill<H: MaxHeap<u32>>(heap: &mut H) {
                        for key in 0..10 {
                            heap.insert(key);
                        }
                    }

                    let mut heap = $type_name::new();
                    fill(&mut heap);
                    assert_eq!(MaxHeap::peek_max(&heap), Ok(&9));
                    MaxHeap::clear(&mut heap);
                    assert!(MaxHeap::is_empty(&heap));
                    assert_eq!(MaxHeap::peek_max(&heap), Err(Error::EmptyCollection));
                }
            }
        )*
    }
}

max_heap_tests!(
    binary_heap: BinaryHeap,
    binomial_heap: BinomialHeap,
);

mod binomial_heap_shape {
    use ordered_collections::binomial_heap::BinomialHeap;

    #[test]
    fn int_test_root_count_is_popcount() {
        let mut heap = BinomialHeap::new();
        for key in 0..1_000u32 {
            heap.insert(key);
            assert_eq!(heap.root_degrees().len(), heap.len().count_ones() as usize);
        }
        for _ in 0..500 {
            heap.extract_max().unwrap();
            assert_eq!(heap.root_degrees().len(), heap.len().count_ones() as usize);
        }
    }
}
