//! Ordering strategies
//!
//! A heap is parameterized by a comparator implementing [`compare::Compare`].
//! The element the comparator ranks [`Greater`](Ordering::Greater) dominates
//! and rises towards the root, so:
//!
//! - [`Natural`] gives a max-heap (the element's own `Ord`)
//! - [`Inverted`] gives a min-heap (operands swapped)
//!
//! Any closure `Fn(&T, &T) -> Ordering` is also a comparator, which is how
//! records are ordered by a single field.
//!
//! The `compare` crate ships equivalents (`compare::natural()` and its
//! `.rev()` adaptor) which work with [`ArrayHeap`](crate::ArrayHeap) too;
//! the zero-sized types here keep heap type signatures short.
//!
//! A comparator must be a consistent total order over every element the heap
//! ever holds. This is not checked; an inconsistent comparator silently
//! breaks the heap-order property.
//!
//! # Example
//!
//! ```rust
//! use compare::Compare;
//! use rust_array_heap::ordering::{Inverted, Natural};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Inverted.compare(&1, &2), Ordering::Greater);
//! ```

use compare::Compare;
use std::cmp::Ordering;

/// Comparator delegating to the element's own total order
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Comparator reversing the element's own total order
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Inverted;

impl<T: Ord> Compare<T> for Inverted {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Returns true if `a` strictly dominates `b` under `cmp`
#[inline]
pub(crate) fn dominates<T, C: Compare<T>>(cmp: &C, a: &T, b: &T) -> bool {
    cmp.compare(a, b) == Ordering::Greater
}
