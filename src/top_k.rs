//! Bounded top-k selection
//!
//! Streams values through a min-heap capped at `k` elements. Every value is
//! pushed, and whenever the heap grows past `k` its root (the smallest value
//! kept so far) is discarded. After the stream ends the heap holds the `k`
//! largest values seen, or all of them if fewer than `k` arrived.
//!
//! # Time Complexity
//!
//! O(N log K) for N values, O(K) extra space.
//!
//! # Example
//!
//! ```rust
//! use rust_order_statistics::top_k::{top_k, TopK};
//!
//! let mut largest = top_k([3, 2, 1, 5, 6, 4], 2);
//! largest.sort();
//! assert_eq!(largest, vec![5, 6]);
//!
//! let mut selector = TopK::new(3);
//! selector.extend([7, 1, 9, 4, 8]);
//! assert_eq!(selector.threshold(), Some(&7));
//! assert_eq!(selector.into_sorted_vec(), vec![9, 8, 7]);
//! ```

use crate::binary::MinHeap;
use crate::traits::HeapError;
use log::debug;

/// Upper bound on the slots reserved up front for a large `k`
const MAX_PREALLOCATED: usize = 4096;

/// Returns the `k` largest values of `values` in arbitrary order
///
/// Yields an empty vector when `k == 0` or `values` is empty. Callers that
/// need sorted output must sort the result themselves.
pub fn top_k<T, I>(values: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut selector = TopK::new(k);
    selector.extend(values);
    selector.into_vec()
}

/// Streaming selector that retains the `k` largest values pushed into it
#[derive(Debug, Clone)]
pub struct TopK<T: Ord> {
    heap: MinHeap<T>,
    k: usize,
}

impl<T: Ord> TopK<T> {
    /// Creates a selector keeping at most `k` values
    ///
    /// A selector with `k == 0` accepts pushes and keeps nothing.
    pub fn new(k: usize) -> Self {
        if k == 0 {
            debug!("top-k selector created with k = 0; every value will be discarded");
        }
        // k + 1: a push may briefly exceed the bound before the root is evicted
        Self {
            heap: MinHeap::with_capacity(k.saturating_add(1).min(MAX_PREALLOCATED)),
            k,
        }
    }

    /// Creates a selector keeping at most `k` values, rejecting `k == 0`
    ///
    /// # Errors
    /// Returns [`HeapError::ZeroCapacity`] when `k == 0`.
    pub fn try_new(k: usize) -> Result<Self, HeapError> {
        if k == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        Ok(Self::new(k))
    }

    /// Offers a value to the selector
    pub fn push(&mut self, value: T) {
        if self.k == 0 {
            return;
        }
        self.heap.push(value);
        if self.heap.len() > self.k {
            self.heap.pop();
        }
    }

    /// The smallest value currently retained
    ///
    /// Once the selector is full, a new value must exceed this to be kept.
    pub fn threshold(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Number of values currently retained
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is retained
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The maximum number of values retained
    pub fn capacity(&self) -> usize {
        self.k
    }

    /// Consumes the selector, returning the retained values in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Consumes the selector, returning the retained values largest first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut out = self.heap.into_sorted_vec();
        out.reverse();
        out
    }
}

impl<T: Ord> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<i32>) -> Vec<i32> {
        v.sort();
        v
    }

    #[test]
    fn test_known_example() {
        assert_eq!(sorted(top_k(vec![3, 2, 1, 5, 6, 4], 2)), vec![5, 6]);
    }

    #[test]
    fn test_zero_k_and_empty_input() {
        assert!(top_k(vec![1, 2, 3], 0).is_empty());
        assert!(top_k(Vec::<i32>::new(), 3).is_empty());
    }

    #[test]
    fn test_k_larger_than_input() {
        assert_eq!(sorted(top_k(vec![4, 1, 3], 10)), vec![1, 3, 4]);
    }

    #[test]
    fn test_duplicates_are_kept_as_multiset() {
        assert_eq!(sorted(top_k(vec![5, 5, 1, 5, 2], 3)), vec![5, 5, 5]);
        assert_eq!(sorted(top_k(vec![7, 7, 7], 2)), vec![7, 7]);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(sorted(top_k(vec![-3, -1, -7, -2], 2)), vec![-2, -1]);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(TopK::<i32>::try_new(0).unwrap_err(), HeapError::ZeroCapacity);
        assert_eq!(TopK::<i32>::try_new(4).unwrap().capacity(), 4);
    }

    #[test]
    fn test_streaming_threshold() {
        let mut selector = TopK::new(2);
        assert_eq!(selector.threshold(), None);

        selector.push(10);
        assert_eq!(selector.threshold(), Some(&10));
        selector.push(20);
        assert_eq!(selector.threshold(), Some(&10));
        selector.push(15);
        assert_eq!(selector.threshold(), Some(&15));
        selector.push(1);
        assert_eq!(selector.threshold(), Some(&15));

        assert_eq!(selector.len(), 2);
        assert_eq!(selector.into_sorted_vec(), vec![20, 15]);
    }

    #[test]
    fn test_zero_capacity_selector_keeps_nothing() {
        let mut selector = TopK::new(0);
        selector.extend(1..100);
        assert!(selector.is_empty());
        assert_eq!(selector.threshold(), None);
    }
}
