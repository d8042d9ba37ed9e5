//! Common traits for the heap-based structures in this crate
//!
//! - [`Compare`]: the ordering a heap is built with. The element that compares
//!   [`Ordering::Less`] sits nearer the root, so the same heap code gives a
//!   min-heap with [`MinOrder`] and a max-heap with [`MaxOrder`].
//! - [`Heap`]: the element-only heap contract, compatible with the
//!   `std::collections::BinaryHeap` API patterns.
//! - [`HeapError`]: errors returned by the checked APIs.
//!
//! The unchecked operations never fail: reading an empty structure returns
//! `None` (or a documented zero value) instead of an error.

use std::cmp::Ordering;
use std::fmt;

/// Error type for the checked operations of this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A bounded selector was asked to keep zero elements
    ZeroCapacity,
    /// The element at `parent` is out of order with the element at `child`
    OrderViolation {
        /// Index of the parent slot
        parent: usize,
        /// Index of the offending child slot
        child: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::ZeroCapacity => {
                write!(f, "capacity must be at least one element")
            }
            HeapError::OrderViolation { parent, child } => {
                write!(
                    f,
                    "heap order violated between parent {} and child {}",
                    parent, child
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// An ordering used to arrange heap elements
///
/// `compare(a, b) == Ordering::Less` means `a` has higher priority than `b`
/// and belongs closer to the root.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, which is how custom
/// orderings (such as the merge cursor's "by value" order) are supplied.
pub trait Compare<T: ?Sized> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Natural ascending order: the smallest element is the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

/// Reversed natural order: the largest element is the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Base trait for element-only heaps
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the root
/// - `peek` returns the root without removing it
///
/// Unlike `BinaryHeap`, which is always a max-heap, which element is the root
/// depends on the heap's [`Compare`] parameter.
///
/// # Example
///
/// ```rust
/// use rust_order_statistics::Heap;
/// use rust_order_statistics::binary::MaxHeap;
///
/// let mut heap: MaxHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(8);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Some(&8));
/// assert_eq!(heap.pop(), Some(8));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the root element without removing it, or `None` when empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the root element, or `None` when empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
