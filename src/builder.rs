//! Constructors wiring an ordering into a fresh heap
//!
//! There is no separate max-heap or min-heap type. These functions return an
//! [`ArrayHeap`] with the matching comparator plugged in:
//!
//! | Function         | Comparator   | Root    |
//! |------------------|--------------|---------|
//! | `max_heap`       | [`Natural`]  | maximum |
//! | `min_heap`       | [`Inverted`] | minimum |
//! | `heap_with`      | any          | whatever the comparator ranks greatest |
//!
//! The `_from` variants bulk-load a vector and establish heap order before
//! returning, so the result is immediately usable.
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::{builder, PriorityQueue};
//!
//! let mut max = builder::max_heap_from(vec![5, 7, 9, 3, 6, 4, 8, 2, 3, 5, 8]);
//! assert_eq!(max.extract_root(), Ok(9));
//!
//! let mut min = builder::min_heap();
//! min.insert(4);
//! min.insert(2);
//! assert_eq!(min.root(), Ok(&2));
//! ```

use crate::array_heap::ArrayHeap;
use crate::ordering::{Inverted, Natural};
use compare::Compare;

/// Creates an empty heap whose root is the maximum element
pub fn max_heap<T: Ord>() -> ArrayHeap<T, Natural> {
    ArrayHeap::with_comparator(Natural)
}

/// Creates an empty heap whose root is the minimum element
pub fn min_heap<T: Ord>() -> ArrayHeap<T, Inverted> {
    ArrayHeap::with_comparator(Inverted)
}

/// Bulk-loads `items` into a heap whose root is the maximum element
pub fn max_heap_from<T: Ord>(items: Vec<T>) -> ArrayHeap<T, Natural> {
    ArrayHeap::from_vec_with(items, Natural)
}

/// Bulk-loads `items` into a heap whose root is the minimum element
pub fn min_heap_from<T: Ord>(items: Vec<T>) -> ArrayHeap<T, Inverted> {
    ArrayHeap::from_vec_with(items, Inverted)
}

/// Creates an empty heap ordered by an arbitrary comparator
///
/// ```rust
/// use rust_array_heap::{builder, PriorityQueue};
///
/// // Longest string at the root
/// let mut heap = builder::heap_with(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// heap.insert("fig");
/// heap.insert("banana");
/// heap.insert("kiwi");
/// assert_eq!(heap.root(), Ok(&"banana"));
/// ```
pub fn heap_with<T, C: Compare<T>>(cmp: C) -> ArrayHeap<T, C> {
    ArrayHeap::with_comparator(cmp)
}

/// Bulk-loads `items` into a heap ordered by an arbitrary comparator
pub fn heap_from_with<T, C: Compare<T>>(items: Vec<T>, cmp: C) -> ArrayHeap<T, C> {
    ArrayHeap::from_vec_with(items, cmp)
}
