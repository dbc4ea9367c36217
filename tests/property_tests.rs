//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap-order property, the root, the length and the capacity band are
//! maintained after every step, for both orderings.

use compare::Compare;
use proptest::prelude::*;
use rust_array_heap::ordering::{Inverted, Natural};
use rust_array_heap::{ArrayHeap, HeapError, PriorityQueue};
use std::cmp::Ordering;

/// Reference answer for the root: the element no other element dominates
fn dominant<C: Compare<i32>>(cmp: &C, values: &[i32]) -> Option<i32> {
    values.iter().copied().reduce(|best, v| {
        if cmp.compare(&v, &best) == Ordering::Greater {
            v
        } else {
            best
        }
    })
}

/// Utilization stays in the band, or capacity sits at the minimum
fn capacity_in_band<T, C: Compare<T>>(heap: &ArrayHeap<T, C>) -> bool {
    let utilization = heap.utilization();
    heap.capacity() == 16 || (25..=75).contains(&utilization)
}

/// Test that insert and extract maintain the heap property and the root
fn test_insert_extract_invariant<C: Compare<i32> + Clone>(
    cmp: C,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = ArrayHeap::with_comparator(cmp.clone());
    let mut inserted = Vec::new();

    for (should_extract, value) in ops {
        if should_extract && !heap.is_empty() {
            let root = heap.extract_root().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let pos = inserted.iter().position(|&v| v == root);
            prop_assert!(pos.is_some(), "extracted {} was never inserted", root);
            if let Some(pos) = pos {
                inserted.swap_remove(pos);
            }
        } else {
            heap.insert(value);
            inserted.push(value);
        }

        prop_assert!(heap.is_heap());
        prop_assert!(capacity_in_band(&heap), "capacity {} len {}", heap.capacity(), heap.len());
        prop_assert_eq!(heap.len(), inserted.len());
        prop_assert_eq!(heap.root().ok().copied(), dominant(&cmp, &inserted));
    }

    Ok(())
}

/// Test that draining a bulk-loaded heap yields non-increasing dominance
fn test_drain_order_invariant<C: Compare<i32> + Clone>(
    cmp: C,
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let n = values.len();
    let mut heap = ArrayHeap::from_vec_with(values, cmp.clone());
    prop_assert!(heap.is_heap());
    prop_assert!(heap.utilization() <= 75);

    let mut previous: Option<i32> = None;
    for _ in 0..n {
        let root = heap.extract_root().map_err(|e| TestCaseError::fail(e.to_string()))?;
        if let Some(prev) = previous {
            prop_assert_ne!(cmp.compare(&prev, &root), Ordering::Less);
        }
        previous = Some(root);
        prop_assert!(capacity_in_band(&heap));
    }

    prop_assert!(heap.is_empty());
    prop_assert_eq!(heap.extract_root(), Err(HeapError::Underflow));
    Ok(())
}

/// Test that change_key either moves a key towards the root or leaves the
/// heap untouched
fn test_change_key_invariant<C: Compare<i32> + Clone>(
    cmp: C,
    initial: Vec<i32>,
    changes: Vec<(usize, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = ArrayHeap::from_vec_with(initial, cmp.clone());

    for (position, new_key) in changes {
        let before = heap.to_vec();
        let position = position % (heap.len() + 1);

        match heap.change_key(position, new_key) {
            Ok(()) => {
                prop_assert!(position >= 1);
                prop_assert_ne!(cmp.compare(&new_key, &before[position - 1]), Ordering::Less);
                prop_assert!(heap.as_slice().contains(&new_key));
            }
            Err(HeapError::InvalidDirection) => {
                prop_assert_eq!(cmp.compare(&new_key, &before[position - 1]), Ordering::Less);
                prop_assert_eq!(heap.to_vec(), before.clone());
            }
            Err(HeapError::InvalidPosition { position: p, len }) => {
                prop_assert_eq!(p, 0);
                prop_assert_eq!(len, before.len());
                prop_assert_eq!(heap.to_vec(), before.clone());
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }

        prop_assert!(heap.is_heap());
        prop_assert_eq!(heap.len(), before.len());
    }

    Ok(())
}

/// Test that sort produces the same order as a standard sort by the comparator
fn test_sort_invariant<C: Compare<i32> + Clone>(
    cmp: C,
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut expected = values.clone();
    expected.sort_by(|a, b| cmp.compare(a, b));

    let mut heap = ArrayHeap::from_vec_with(values, cmp);
    heap.sort();
    prop_assert_eq!(heap.to_vec(), expected);
    Ok(())
}

proptest! {
    #[test]
    fn test_natural_insert_extract_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_insert_extract_invariant(Natural, ops)?;
    }

    #[test]
    fn test_inverted_insert_extract_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..200)) {
        test_insert_extract_invariant(Inverted, ops)?;
    }

    #[test]
    fn test_natural_drain_order_invariant(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_drain_order_invariant(Natural, values)?;
    }

    #[test]
    fn test_inverted_drain_order_invariant(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_drain_order_invariant(Inverted, values)?;
    }

    #[test]
    fn test_natural_change_key_invariant(
        initial in prop::collection::vec(-100i32..100, 0..50),
        changes in prop::collection::vec((0usize..60, -100i32..100), 0..30)
    ) {
        test_change_key_invariant(Natural, initial, changes)?;
    }

    #[test]
    fn test_inverted_change_key_invariant(
        initial in prop::collection::vec(-100i32..100, 0..50),
        changes in prop::collection::vec((0usize..60, -100i32..100), 0..30)
    ) {
        test_change_key_invariant(Inverted, initial, changes)?;
    }

    #[test]
    fn test_natural_sort_invariant(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_sort_invariant(Natural, values)?;
    }

    #[test]
    fn test_inverted_sort_invariant(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_sort_invariant(Inverted, values)?;
    }
}
