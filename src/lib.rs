//! Fibonacci heap over integer keys
//!
//! This crate provides a mergeable priority queue built from a forest of
//! heap-ordered trees whose roots, and every sibling group, form circular
//! doubly-linked lists. Nodes live in a slot arena and are addressed through
//! stable [`NodeId`] handles instead of pointers. Every heap of a thread
//! shares that thread's [`NodeArena`], so handles are unique across heaps and
//! stay valid through [`FibonacciHeap::meld`].
//!
//! # Complexity
//!
//! | Operation      | Complexity                     |
//! |----------------|--------------------------------|
//! | `insert`       | O(1) worst-case                |
//! | `find_min`     | O(1) worst-case                |
//! | `meld`         | O(1) worst-case                |
//! | `decrease_key` | O(1) amortized                 |
//! | `delete_min`   | O(log n) amortized             |
//! | `delete`       | O(log n) amortized             |
//! | `k_min`        | O(k · deg(H))                  |
//!
//! The amortized bounds come from the potential `trees + 2 * marked`, which
//! every heap exposes through [`FibonacciHeap::potential`]. Link and cut counts
//! are tracked per heap in [`Metrics`].
//!
//! # Example
//!
//! ```rust
//! use fibheap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! let a = heap.insert(20);
//! heap.insert(8);
//! heap.insert(3);
//!
//! heap.decrease_key(a, 19).unwrap();
//! assert_eq!(heap.min_key(), Some(1));
//!
//! assert_eq!(heap.delete_min(), Some(1));
//! assert_eq!(heap.k_min(2), vec![3, 8]);
//! ```

pub mod arena;
pub mod error;
pub mod experiment;
pub mod fibonacci;
pub mod kmin;
pub mod metrics;
pub mod node;
pub mod rank;
pub mod render;
pub mod validate;

mod consolidate;
mod cut;
mod forest;

pub use arena::NodeArena;
pub use error::HeapError;
pub use fibonacci::FibonacciHeap;
pub use kmin::k_min;
pub use metrics::Metrics;
pub use node::{Key, Node, NodeId};
