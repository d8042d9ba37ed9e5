//! Array-backed binary heap with an explicit comparator
//!
//! A complete binary tree stored in a `Vec`, where the children of index `i`
//! live at `2i + 1` and `2i + 2`. The ordering is a type parameter implementing
//! [`Compare`], so a min-heap and a max-heap are the same structure
//! instantiated with opposite comparators:
//!
//! - [`MinHeap<T>`]: root is the smallest element ([`MinOrder`])
//! - [`MaxHeap<T>`]: root is the largest element ([`MaxOrder`])
//! - `BinaryHeap<T, F>` with a closure or fn pointer for custom orders
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `from_vec` | O(n)       |
//! | `append`   | O(m log(n + m)) |
//!
//! # Example
//!
//! ```rust
//! use rust_order_statistics::binary::{MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::new();
//! let mut max = MaxHeap::new();
//! for x in [5, 1, 8, 2] {
//!     min.push(x);
//!     max.push(x);
//! }
//!
//! assert_eq!(min.peek(), Some(&1));
//! assert_eq!(max.peek(), Some(&8));
//! assert_eq!(max.pop(), Some(8));
//! assert_eq!(max.pop(), Some(5));
//! ```

use crate::traits::{Compare, Heap, MaxOrder, MinOrder};
use std::fmt;

/// A binary heap ordered by the comparator `C`
///
/// Operations on an empty heap never fail: `peek` and `pop` return `None`.
///
/// Not thread-safe; share an instance across threads only behind external
/// synchronization.
#[derive(Clone)]
pub struct BinaryHeap<T, C = MinOrder> {
    /// Heap-ordered storage
    data: Vec<T>,
    cmp: C,
}

/// A binary heap whose root is the smallest element
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// A binary heap whose root is the largest element
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

impl<T, C: Compare<T> + Default> BinaryHeap<T, C> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp: C::default(),
        }
    }

    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with(data, C::default())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Builds a heap ordered by `cmp` from an arbitrary vector in O(n)
    ///
    /// Sifts down every non-leaf from the last one back to the root.
    pub fn from_vec_with(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        let len = heap.data.len();
        for index in (0..len / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the root
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    pub fn append(&mut self, other: &mut Self) {
        for item in other.data.drain(..) {
            self.data.push(item);
            let last = self.data.len() - 1;
            self.sift_up(last);
        }
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The backing array, in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates the elements in arbitrary (storage) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Consumes the heap, returning the backing array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements root-first
    ///
    /// Ascending for a [`MinHeap`], descending for a [`MaxHeap`].
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }

    /// True when `a` belongs strictly above `b`
    #[inline]
    fn before(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.data[a], &self.data[b]).is_lt()
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.before(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut top = index;

            if left < len && self.before(left, top) {
                top = left;
            }
            if right < len && self.before(right, top) {
                top = right;
            }

            if top != index {
                self.data.swap(index, top);
                index = top;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for BinaryHeap<T, C> {
    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{is_heap_by, is_max_heap, is_min_heap};
    use std::cmp::Ordering;

    #[test]
    fn test_basic_operations() {
        let mut heap = MinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_empty_signals() {
        let mut heap: MaxHeap<i32> = MaxHeap::new();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_max_heap_order() {
        let mut heap = MaxHeap::new();
        for x in [5, 1, 8, 2, 8] {
            heap.push(x);
        }
        assert_eq!(heap.peek(), Some(&8));
        assert_eq!(heap.into_sorted_vec(), vec![8, 8, 5, 2, 1]);
    }

    #[test]
    fn test_duplicate_values() {
        let mut heap = MinHeap::new();
        heap.push(1);
        heap.push(1);
        heap.push(1);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
    }

    #[test]
    fn test_custom_comparator() {
        let mut heap = BinaryHeap::with_comparator(|a: &(i32, char), b: &(i32, char)| {
            b.0.cmp(&a.0).then(a.1.cmp(&b.1))
        });
        heap.push((1, 'a'));
        heap.push((9, 'z'));
        heap.push((9, 'b'));

        assert_eq!(heap.pop(), Some((9, 'b')));
        assert_eq!(heap.pop(), Some((9, 'z')));
        assert_eq!(heap.pop(), Some((1, 'a')));
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = MinHeap::from_vec(vec![9, 4, 7, 1, 8, 2, 6, 3, 5]);
        assert!(is_min_heap(heap.as_slice()));
        assert_eq!(heap.into_sorted_vec(), (1..=9).collect::<Vec<_>>());

        let heap: MaxHeap<i32> = vec![3, 1, 4, 1, 5, 9, 2, 6].into();
        assert!(is_max_heap(heap.as_slice()));
        assert_eq!(heap.peek(), Some(&9));
    }

    #[test]
    fn test_storage_stays_valid_after_mutation() {
        let mut heap = MaxHeap::new();
        for i in [4, 10, 3, 5, 1, 15, 7] {
            heap.push(i);
            assert!(is_max_heap(heap.as_slice()));
        }
        while heap.pop().is_some() {
            assert!(is_max_heap(heap.as_slice()));
        }

        let by_abs = |a: &i32, b: &i32| -> Ordering { a.abs().cmp(&b.abs()) };
        let heap = BinaryHeap::from_vec_with(vec![-7, 3, -1, 5, -2], by_abs);
        assert!(is_heap_by(heap.as_slice(), by_abs));
        assert_eq!(heap.peek(), Some(&-1));
    }

    #[test]
    fn test_append() {
        let mut heap1: MinHeap<i32> = [3, 1].into_iter().collect();
        let mut heap2: MinHeap<i32> = [4, 2].into_iter().collect();

        heap1.append(&mut heap2);

        assert!(heap2.is_empty());
        assert_eq!(heap1.len(), 4);
        assert_eq!(heap1.into_sorted_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = MinHeap::new();

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = MaxHeap::new();

        for i in 0..100 {
            heap.push(i);
        }

        for i in (0..100).rev() {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_clear_and_extend() {
        let mut heap = MinHeap::new();
        heap.extend(vec![5, 3, 9]);
        assert_eq!(heap.peek(), Some(&3));
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(format!("{:?}", heap), "[]");
    }
}
