use criterion::{criterion_group, criterion_main, Criterion};

const NUM_OF_OPERATIONS: usize = 1_000;

macro_rules! max_heap_benches {
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
                        let mut heap = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            heap.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_peek_max(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut heap = $type_name::new();
                    for _ in 0..NUM_OF_OPERATIONS {
                        heap.insert(rng.next_u32());
                    }

                    c.bench_function(&format!("bench {} peek_max", stringify!($module_name)), move |b| b.iter(|| {
                        black_box(heap.peek_max().ok());
                    }));
                }

                pub fn bench_extract_max(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} extract_max", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut heap = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            heap.insert(rng.next_u32());
                        }
                        while let Ok(key) = heap.extract_max() {
                            black_box(key);
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            $(
                $module_name::bench_insert,
                $module_name::bench_peek_max,
                $module_name::bench_extract_max,
            )*
        );
    }
}

max_heap_benches!(
    binary_heap: BinaryHeap,
    binomial_heap: BinomialHeap,
);

criterion_main!(benches);
