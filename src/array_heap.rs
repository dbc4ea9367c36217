//! Array-backed binary heap with a pluggable ordering
//!
//! [`ArrayHeap`] is a single binary heap implementation that serves as a
//! max-heap or a min-heap depending on the comparator it is built with. The
//! comparator is fixed at construction; there is no way to swap it later.
//!
//! Elements live in an [`ArrayStore`] whose capacity doubles when it reaches
//! 75% utilization and halves when it falls to 25% (never below 16 slots),
//! unless a custom [`ResizePolicy`] is supplied.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `insert`       | O(log n) amortized |
//! | `extract_root` | O(log n) amortized |
//! | `root`         | O(1)               |
//! | `change_key`   | O(log n)           |
//! | `sort`         | O(n log n)         |
//! | `rebuild`      | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::{builder, PriorityQueue};
//!
//! let mut heap = builder::min_heap_from(vec![5, 7, 9, 3, 6]);
//! assert_eq!(heap.root(), Ok(&3));
//!
//! heap.insert(1);
//! assert_eq!(heap.extract_root(), Ok(1));
//! assert_eq!(heap.extract_root(), Ok(3));
//! ```

use crate::engine;
use crate::ordering::Natural;
use crate::storage::{ArrayStore, ResizePolicy};
use crate::traits::{HeapError, PriorityQueue};
use compare::Compare;
use log::trace;
use std::cmp::Ordering;
use std::fmt;

/// A binary heap stored in a resizable array
///
/// `C` decides dominance: the element it ranks greatest is the root. Use
/// [`Natural`] for a max-heap and [`Inverted`](crate::ordering::Inverted) for
/// a min-heap, or the [`builder`](crate::builder) functions which wire these
/// up for you.
#[derive(Clone)]
pub struct ArrayHeap<T, C = Natural> {
    store: ArrayStore<T>,
    cmp: C,
}

impl<T, C: Compare<T>> ArrayHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_comparator_and_policy(cmp, ResizePolicy::default())
    }

    /// Creates an empty heap ordered by `cmp` that resizes by `policy`
    pub fn with_comparator_and_policy(cmp: C, policy: ResizePolicy) -> Self {
        Self {
            store: ArrayStore::new(policy),
            cmp,
        }
    }

    /// Creates a heap from `items`, ordered by `cmp`
    ///
    /// Capacity starts at the minimum and doubles until the items fill at most
    /// 75% of it. The items are rearranged into heap order before returning.
    pub fn from_vec_with(items: Vec<T>, cmp: C) -> Self {
        Self::from_vec_with_policy(items, cmp, ResizePolicy::default())
    }

    /// Creates a heap from `items`, ordered by `cmp`, resizing by `policy`
    pub fn from_vec_with_policy(items: Vec<T>, cmp: C, policy: ResizePolicy) -> Self {
        let mut heap = Self {
            store: ArrayStore::from_vec(items, policy),
            cmp,
        };
        trace!(
            "bulk-loaded heap: {} elements, capacity {}",
            heap.store.len(),
            heap.store.capacity()
        );
        heap.rebuild();
        heap
    }

    /// Physical capacity of the backing store in slots
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Percentage of capacity occupied by live elements, rounded down
    pub fn utilization(&self) -> usize {
        self.store.utilization()
    }

    /// The resize policy in use
    pub fn policy(&self) -> ResizePolicy {
        self.store.policy()
    }

    /// The comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Live elements in storage order
    ///
    /// In heap order unless [`sort`](Self::sort) was the last mutation, in
    /// which case the slice is sorted.
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Copies the live elements, in storage order, into a new vector
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.store.as_slice().to_vec()
    }

    /// Consumes the heap, returning the live elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.store.into_vec()
    }

    /// Consumes the heap, returning its elements ascending under the
    /// comparator
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.sort();
        self.store.into_vec()
    }

    /// Re-establishes heap order over the live elements
    ///
    /// Required after [`sort`](Self::sort) before the heap is used as a
    /// priority queue again.
    pub fn rebuild(&mut self) {
        engine::build_heap(self.store.as_mut_slice(), &self.cmp);
    }

    /// Sorts the live elements in place
    ///
    /// Afterwards the elements ascend under the comparator: ascending for a
    /// max-heap, descending for a min-heap. The length is unchanged.
    ///
    /// This deliberately leaves the heap out of heap order. Call
    /// [`rebuild`](Self::rebuild) before the next `insert`, `extract_root`
    /// or `change_key`; until then those operations return unspecified
    /// results.
    pub fn sort(&mut self) {
        trace!("heap-sorting {} elements", self.store.len());
        engine::heap_sort(self.store.as_mut_slice(), &self.cmp);
    }

    /// Returns true if the live elements are in heap order
    pub fn is_heap(&self) -> bool {
        engine::is_heap(self.store.as_slice(), &self.cmp)
    }
}

impl<T: Ord> ArrayHeap<T, Natural> {
    /// Creates an empty max-heap
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for ArrayHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for ArrayHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn root(&self) -> Result<&T, HeapError> {
        self.store.as_slice().first().ok_or(HeapError::Underflow)
    }

    fn extract_root(&mut self) -> Result<T, HeapError> {
        let root = self.store.swap_remove(0).ok_or(HeapError::Underflow)?;
        engine::sift_down(self.store.as_mut_slice(), 0, &self.cmp);
        self.store.shrink_if_needed();
        Ok(root)
    }

    fn insert(&mut self, key: T) {
        self.store.push(key);
        let last = self.store.len() - 1;
        engine::sift_up(self.store.as_mut_slice(), last, &self.cmp);
        self.store.grow_if_needed();
    }

    fn change_key(&mut self, position: usize, new_key: T) -> Result<(), HeapError> {
        let len = self.store.len();
        if position == 0 || position > len {
            return Err(HeapError::InvalidPosition { position, len });
        }
        // 1-based position to 0-based index; the engine only sees the latter
        let index = position - 1;

        let data = self.store.as_mut_slice();
        if self.cmp.compare(&new_key, &data[index]) == Ordering::Less {
            return Err(HeapError::InvalidDirection);
        }
        data[index] = new_key;
        engine::sift_up(data, index, &self.cmp);
        Ok(())
    }
}

impl<T, C: Compare<T>> Extend<T> for ArrayHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord> FromIterator<T> for ArrayHeap<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), Natural)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ArrayHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("len", &self.store.len())
            .field("capacity", &self.store.capacity())
            .field("items", &self.store.as_slice())
            .finish()
    }
}

/// Diagnostic listing of the live elements in storage order
///
/// Not a stable serialization format.
impl<T: fmt::Display, C> fmt::Display for ArrayHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayHeap {{ len: {}, items: [", self.store.len())?;
        for (i, item) in self.store.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "] }}")
    }
}
