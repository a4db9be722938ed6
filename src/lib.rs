//! In-memory ordered containers and max-priority queues.
//!
//! The trees ([`bst::BinarySearchTree`], [`avl_tree::AvlTree`], [`treap::Treap`]) share the
//! [`SearchTree`] interface and the heaps ([`binary_heap::BinaryHeap`],
//! [`binomial_heap::BinomialHeap`]) share the [`MaxHeap`] interface. None of the containers are
//! synchronized; callers that share one across threads must serialize access themselves.

#[macro_use]
extern crate log;
extern crate rand;

mod config;
mod error;
mod traits;
pub mod avl_tree;
pub mod binary_heap;
pub mod binomial_heap;
pub mod bst;
pub mod treap;

pub use crate::config::DuplicatePolicy;
pub use crate::error::{Error, Result};
pub use crate::traits::{MaxHeap, SearchTree};
