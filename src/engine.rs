//! Binary heap algorithms over slices
//!
//! These routines implement the heap itself: they know nothing about
//! capacity or 1-based positions. Every function takes the live elements as a
//! slice (so the logical length is `data.len()`), a 0-based index where
//! relevant, and the comparator deciding dominance.
//!
//! The heap-order property maintained here is: for every index `i` and each
//! child `c` in `{2i + 1, 2i + 2}` within the slice,
//! `cmp.compare(&data[i], &data[c])` is not `Less`.
//!
//! # Time Complexity
//!
//! | Function     | Complexity |
//! |--------------|------------|
//! | `sift_down`  | O(log n)   |
//! | `sift_up`    | O(log n)   |
//! | `build_heap` | O(n)       |
//! | `heap_sort`  | O(n log n) |
//! | `is_heap`    | O(n)       |

use crate::ordering::dominates;
use compare::Compare;
use std::cmp::Ordering;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Moves the element at `index` down until neither child dominates it
///
/// When both children exist the right one is chosen only if it strictly
/// dominates the left; ties go left.
pub fn sift_down<T, C: Compare<T>>(data: &mut [T], mut index: usize, cmp: &C) {
    let len = data.len();
    while index < len / 2 {
        let left = 2 * index + 1;
        let right = left + 1;

        let child = if right < len && dominates(cmp, &data[right], &data[left]) {
            right
        } else {
            left
        };

        if !dominates(cmp, &data[child], &data[index]) {
            break;
        }

        data.swap(index, child);
        index = child;
    }
}

/// Moves the element at `index` up while it dominates its parent
pub fn sift_up<T, C: Compare<T>>(data: &mut [T], mut index: usize, cmp: &C) {
    while index > 0 {
        let parent = parent(index);
        if cmp.compare(&data[parent], &data[index]) != Ordering::Less {
            break;
        }
        data.swap(index, parent);
        index = parent;
    }
}

/// Rearranges an arbitrary slice into heap order
pub fn build_heap<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    for index in (0..data.len() / 2).rev() {
        sift_down(data, index, cmp);
    }
}

/// Sorts the slice in place so that it ascends under `cmp`
///
/// A [`Natural`](crate::ordering::Natural) comparator yields ascending order,
/// an [`Inverted`](crate::ordering::Inverted) one descending order. The slice
/// is not a heap afterwards.
pub fn heap_sort<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    build_heap(data, cmp);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0, cmp);
    }
}

/// Returns true if the slice satisfies the heap-order property under `cmp`
pub fn is_heap<T, C: Compare<T>>(data: &[T], cmp: &C) -> bool {
    (1..data.len()).all(|child| cmp.compare(&data[parent(child)], &data[child]) != Ordering::Less)
}
