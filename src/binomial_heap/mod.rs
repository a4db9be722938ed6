//! Binomial max-heap.
//!
//! A binomial heap is a list of binomial trees, each satisfying the heap property. A binomial tree
//! of degree `d` has exactly `2^d` nodes and its root has `d` children, which are themselves roots
//! of binomial trees of degrees `0` through `d - 1`. After every mutation the root list holds at
//! most one tree of each degree, so the degrees present mirror the set bits of the number of keys
//! and a heap of `n` keys has at most `log2(n) + 1` trees.
//!
//! Two trees of the same degree are linked in constant time by making the root with the larger
//! key the parent of the other. Consolidating the root list links trees of equal degree until no
//! two share a degree, in the same way a carry propagates in binary addition.
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `peek_max`    | O(log n)   |
//! | `extract_max` | O(log n)   |
//! | `append`      | O(log n)   |

mod heap;
mod node;

pub use self::heap::BinomialHeap;
