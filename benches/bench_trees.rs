use criterion::{criterion_group, criterion_main, Criterion};

const NUM_OF_OPERATIONS: usize = 1_000;

macro_rules! search_tree_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use ordered_collections::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut tree = $type_name::default();
                        for _ in 0..NUM_OF_OPERATIONS {
                            tree.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_search(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::default();
                    let mut keys = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        tree.insert(key);
                        keys.push(key);
                    }

                    c.bench_function(&format!("bench {} search", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(tree.search(key));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} remove", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut tree = $type_name::default();
                        let mut keys = Vec::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            tree.insert(key);
                            keys.push(key);
                        }
                        for key in &keys {
                            black_box(tree.remove(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            $(
                $module_name::bench_insert,
                $module_name::bench_search,
                $module_name::bench_remove,
            )*
        );
    }
}

search_tree_benches!(
    bst: BinarySearchTree,
    avl_tree: AvlTree,
    treap: Treap,
);

criterion_main!(benches);
