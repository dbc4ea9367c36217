//! Array-backed binary heaps with pluggable ordering
//!
//! This crate provides one binary heap, [`ArrayHeap`], that acts as a max-heap
//! or a min-heap depending on the comparator injected at construction. The
//! same sift-down, sift-up, build-heap and heap-sort routines serve both
//! orderings.
//!
//! # Features
//!
//! - **Pluggable ordering**: [`Natural`](ordering::Natural) for a max-heap,
//!   [`Inverted`](ordering::Inverted) for a min-heap, or any closure
//!   `Fn(&T, &T) -> Ordering`
//! - **Self-sizing storage**: capacity doubles at 75% utilization and halves
//!   at 25%, never below 16 slots (configurable via
//!   [`ResizePolicy`](storage::ResizePolicy))
//! - **Priority-queue operations**: root, extract root, insert, and
//!   change-key at a 1-based position with a direction check
//! - **In-place heap sort** over the live elements
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::{builder, HeapError, PriorityQueue};
//!
//! let mut heap = builder::max_heap_from(vec![4, 1, 7]);
//! assert_eq!(heap.root(), Ok(&7));
//!
//! // Keys may only move towards the root: up in a max-heap
//! assert_eq!(heap.change_key(2, 9), Ok(()));
//! assert_eq!(heap.change_key(1, 0), Err(HeapError::InvalidDirection));
//!
//! assert_eq!(heap.extract_root(), Ok(9));
//! ```
//!
//! # Logging
//!
//! Capacity changes are reported at `debug` level and bulk loads and sorts at
//! `trace` level through the [`log`] facade. No logger is installed by this
//! crate.

pub mod array_heap;
pub mod builder;
pub mod engine;
pub mod ordering;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use array_heap::ArrayHeap;
pub use traits::{HeapError, PriorityQueue};
