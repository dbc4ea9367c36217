//! Resizable backing storage for array heaps
//!
//! [`ArrayStore`] keeps the heap's elements contiguously and tracks two sizes:
//!
//! - the logical length: how many slots hold live elements
//! - the physical capacity: how many slots the store has reserved
//!
//! Capacity follows a [`ResizePolicy`]. After each structural change the heap
//! calls [`ArrayStore::grow_if_needed`] or [`ArrayStore::shrink_if_needed`]
//! once, which keeps utilization (`len * 100 / capacity`) inside the policy's
//! band, or capacity at the policy minimum.
//!
//! Resizing moves elements into a buffer of the new size in their existing
//! order; only unused trailing capacity changes.
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::storage::{ArrayStore, ResizePolicy};
//!
//! let mut store = ArrayStore::new(ResizePolicy::default());
//! assert_eq!(store.capacity(), 16);
//!
//! for i in 0..12 {
//!     store.push(i);
//! }
//! assert_eq!(store.utilization(), 75);
//!
//! store.grow_if_needed();
//! assert_eq!(store.capacity(), 32);
//! ```

use crate::traits::HeapError;
use log::{debug, warn};

/// Capacity never drops below this many slots under the default policy
pub const MIN_CAPACITY: usize = 16;
/// Utilization percentage at or below which the store halves its capacity
pub const MIN_UTILIZATION: usize = 25;
/// Utilization percentage at or above which the store doubles its capacity
pub const MAX_UTILIZATION: usize = 75;
/// Largest `min_capacity` a [`ResizePolicy`] accepts; doubling it stays
/// within what a `Vec` can address
pub const MAX_MIN_CAPACITY: usize = isize::MAX as usize / 2;

/// Thresholds governing when an [`ArrayStore`] grows or shrinks
///
/// The default policy is a 16-slot minimum with a 25%–75% utilization band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePolicy {
    min_capacity: usize,
    shrink_at: usize,
    grow_at: usize,
}

impl ResizePolicy {
    /// Creates a policy, rejecting thresholds that could not keep
    /// utilization inside the band with a single doubling or halving
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidPolicy`] if `min_capacity` is zero or
    /// above [`MAX_MIN_CAPACITY`], `grow_at` exceeds 100, or `shrink_at * 2`
    /// is not below `grow_at`.
    pub fn new(min_capacity: usize, shrink_at: usize, grow_at: usize) -> Result<Self, HeapError> {
        if min_capacity == 0 {
            return Err(HeapError::InvalidPolicy("min_capacity must be at least 1"));
        }
        if min_capacity > MAX_MIN_CAPACITY {
            return Err(HeapError::InvalidPolicy("min_capacity is too large"));
        }
        if grow_at > 100 {
            return Err(HeapError::InvalidPolicy("grow_at must not exceed 100"));
        }
        if shrink_at.checked_mul(2).map_or(true, |doubled| doubled >= grow_at) {
            return Err(HeapError::InvalidPolicy(
                "shrink_at must be less than half of grow_at",
            ));
        }
        Ok(Self {
            min_capacity,
            shrink_at,
            grow_at,
        })
    }

    /// Smallest capacity the store will ever hold
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Utilization percentage at or below which capacity is halved
    pub fn shrink_at(&self) -> usize {
        self.shrink_at
    }

    /// Utilization percentage at or above which capacity is doubled
    pub fn grow_at(&self) -> usize {
        self.grow_at
    }

    /// Capacity for a bulk load of `len` elements
    ///
    /// Starts at the minimum and doubles until utilization is at most
    /// `grow_at`.
    pub fn bulk_capacity(&self, len: usize) -> usize {
        let mut capacity = self.min_capacity;
        while len * 100 / capacity > self.grow_at {
            capacity *= 2;
        }
        capacity
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            min_capacity: MIN_CAPACITY,
            shrink_at: MIN_UTILIZATION,
            grow_at: MAX_UTILIZATION,
        }
    }
}

/// Contiguous element storage with policy-driven capacity
#[derive(Debug, Clone)]
pub struct ArrayStore<T> {
    /// Live elements; `items.len()` is the logical length
    items: Vec<T>,
    /// Physical capacity, always at least `items.len()`
    capacity: usize,
    policy: ResizePolicy,
}

impl<T> ArrayStore<T> {
    /// Creates an empty store at the policy's minimum capacity
    pub fn new(policy: ResizePolicy) -> Self {
        let capacity = policy.min_capacity();
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Creates a store holding `items`, sized by [`ResizePolicy::bulk_capacity`]
    pub fn from_vec(mut items: Vec<T>, policy: ResizePolicy) -> Self {
        let capacity = policy.bulk_capacity(items.len());
        if items.capacity() > capacity {
            items.shrink_to(capacity);
        } else {
            items.reserve_exact(capacity - items.len());
        }
        Self {
            items,
            capacity,
            policy,
        }
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no live elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Physical capacity in slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The policy this store resizes by
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Percentage of capacity occupied by live elements, rounded down
    #[inline]
    pub fn utilization(&self) -> usize {
        self.items.len() * 100 / self.capacity
    }

    /// Live elements in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Live elements in storage order, mutably
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Appends an element after the last live slot
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        if self.items.len() > self.capacity {
            warn!(
                "push overflowed capacity {} without grow_if_needed; doubling",
                self.capacity
            );
            self.resize(self.capacity * 2);
        }
    }

    /// Removes the element at `index`, moving the last live element into its
    /// slot. Returns `None` if `index` is out of range.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.swap_remove(index))
        } else {
            None
        }
    }

    /// Doubles capacity if utilization has reached the grow threshold
    ///
    /// Returns true if the store was resized.
    pub fn grow_if_needed(&mut self) -> bool {
        if self.utilization() < self.policy.grow_at() {
            return false;
        }
        self.resize(self.capacity * 2);
        true
    }

    /// Halves capacity, never below the minimum, if utilization has fallen to
    /// the shrink threshold
    ///
    /// Returns true if the store was resized.
    pub fn shrink_if_needed(&mut self) -> bool {
        if self.utilization() > self.policy.shrink_at() {
            return false;
        }
        let new_capacity = (self.capacity / 2).max(self.policy.min_capacity());
        if new_capacity == self.capacity {
            return false;
        }
        self.resize(new_capacity);
        true
    }

    fn resize(&mut self, new_capacity: usize) {
        debug!(
            "resizing heap store: capacity {} -> {} ({} live)",
            self.capacity,
            new_capacity,
            self.items.len()
        );
        let mut items = Vec::with_capacity(new_capacity);
        items.append(&mut self.items);
        self.items = items;
        self.capacity = new_capacity;
    }

    /// Consumes the store, returning the live elements
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
