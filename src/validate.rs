//! Heap-property validation for plain slices
//!
//! A slice is a heap when every non-leaf index `i` in `0..n / 2` is ordered
//! against both of its children `2i + 1` and `2i + 2` (when present).
//! Slices of length zero or one are trivially heaps.
//!
//! All checks are O(n), never mutate, and stop at the first violation.
//!
//! ```rust
//! use rust_order_statistics::validate::{check_heap_by, is_min_heap};
//! use rust_order_statistics::{HeapError, MinOrder};
//!
//! assert!(is_min_heap(&[1, 3, 6, 5, 9, 8]));
//! assert!(!is_min_heap(&[10, 5, 8, 3, 1]));
//! assert_eq!(
//!     check_heap_by(&[10, 5, 8, 3, 1], MinOrder),
//!     Err(HeapError::OrderViolation { parent: 0, child: 1 })
//! );
//! ```

use crate::traits::{Compare, HeapError, MaxOrder, MinOrder};

/// Returns true if every parent is `<=` both of its children
pub fn is_min_heap<T: Ord>(items: &[T]) -> bool {
    is_heap_by(items, MinOrder)
}

/// Returns true if every parent is `>=` both of its children
pub fn is_max_heap<T: Ord>(items: &[T]) -> bool {
    is_heap_by(items, MaxOrder)
}

/// Returns true if no child compares strictly before its parent under `cmp`
pub fn is_heap_by<T, C: Compare<T>>(items: &[T], cmp: C) -> bool {
    check_heap_by(items, cmp).is_ok()
}

/// Like [`is_heap_by`], but reports the first offending parent/child pair
///
/// # Errors
/// Returns [`HeapError::OrderViolation`] for the first violation, scanning
/// parents in index order and the left child before the right.
pub fn check_heap_by<T, C: Compare<T>>(items: &[T], cmp: C) -> Result<(), HeapError> {
    let n = items.len();
    if n <= 1 {
        return Ok(());
    }

    for parent in 0..n / 2 {
        let left = 2 * parent + 1;
        let right = left + 1;

        // left always exists for a non-leaf
        if cmp.compare(&items[left], &items[parent]).is_lt() {
            return Err(HeapError::OrderViolation {
                parent,
                child: left,
            });
        }
        if right < n && cmp.compare(&items[right], &items[parent]).is_lt() {
            return Err(HeapError::OrderViolation {
                parent,
                child: right,
            });
        }
    }

    Ok(())
}
