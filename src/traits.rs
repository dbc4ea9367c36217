//! Common traits and error types for the array heap
//!
//! This module provides:
//!
//! - [`HeapError`]: every failure a heap operation can report
//! - [`PriorityQueue`]: the caller-facing priority-queue surface
//!
//! The trait is written against an abstract "dominance" order rather than
//! min or max: whichever element the heap's comparator ranks highest is the
//! root. A max-heap and a min-heap are the same type with a different
//! comparator plugged in.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap is empty, so there is no root to read or extract
    #[error("heap underflow: the heap is empty")]
    Underflow,
    /// The new key is dominated by the current key under the active ordering
    ///
    /// A max-ordered heap only allows keys to increase; a min-ordered heap only
    /// allows them to decrease.
    #[error("key can only move towards the root: increase in a max heap, decrease in a min heap")]
    InvalidDirection,
    /// A 1-based position fell outside `1..=len`
    #[error("position {position} is out of range for a heap of length {len}")]
    InvalidPosition {
        /// The 1-based position the caller supplied
        position: usize,
        /// Number of live elements at the time of the call
        len: usize,
    },
    /// A resize policy was rejected
    #[error("invalid resize policy: {0}")]
    InvalidPolicy(&'static str),
}

/// Priority-queue operations over a heap of `T`
///
/// The root is the element that dominates every other element under the
/// heap's comparator: the maximum for a natural ordering, the minimum for an
/// inverted one.
///
/// # Example
///
/// ```rust
/// use rust_array_heap::{builder, PriorityQueue};
///
/// let mut heap = builder::max_heap();
/// heap.insert(3);
/// heap.insert(7);
/// heap.insert(5);
///
/// assert_eq!(heap.root(), Ok(&7));
/// assert_eq!(heap.extract_root(), Ok(7));
/// assert_eq!(heap.extract_root(), Ok(5));
/// ```
pub trait PriorityQueue<T> {
    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of live elements
    fn len(&self) -> usize;

    /// Returns the dominant element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn root(&self) -> Result<&T, HeapError>;

    /// Removes and returns the dominant element
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) amortized (includes a possible shrink of the backing store).
    fn extract_root(&mut self) -> Result<T, HeapError>;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(log n) amortized (includes a possible growth of the backing store).
    fn insert(&mut self, key: T);

    /// Replaces the key at a 1-based `position` with `new_key`
    ///
    /// The new key must not be dominated by the old one: it may only move
    /// towards the root. Positions are 1-based, so `1` addresses the root.
    ///
    /// # Errors
    /// - [`HeapError::InvalidPosition`] if `position` is not in `1..=len`
    /// - [`HeapError::InvalidDirection`] if `new_key` is dominated by the
    ///   current key
    ///
    /// The heap is left unmodified when an error is returned.
    ///
    /// # Time Complexity
    /// O(log n)
    fn change_key(&mut self, position: usize, new_key: T) -> Result<(), HeapError>;
}
