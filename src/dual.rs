//! Double-ended priority queue with lazy deletion
//!
//! Every inserted value is pushed onto both a [`MaxHeap`] and a [`MinHeap`].
//! Removing the maximum physically removes it from the max-heap only; the
//! min-heap keeps a now-stale copy. Instead of searching the other heap for
//! that copy (O(n)), the removal is recorded in a [`DeletionLedger`], and the
//! stale copy is discarded later, when it surfaces at the root of its heap.
//!
//! # Ledgers
//!
//! Each physical heap has its own ledger of copies it still holds but that
//! were already removed through the opposite side:
//!
//! - `remove_max` records the value in the min-heap's ledger
//! - `remove_min` records the value in the max-heap's ledger
//!
//! Before any read or removal, the heap being accessed runs a cleanup pass:
//! while its root has a pending count in *its* ledger, the root is popped
//! and the count decremented. A cleanup pass therefore never discards a copy
//! that is still logically present, even when equal values are inserted and
//! removed through both sides in any interleaving.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity           |
//! |--------------|----------------------|
//! | `insert`     | O(log n)             |
//! | `get_max`    | O(log n) amortized   |
//! | `get_min`    | O(log n) amortized   |
//! | `remove_max` | O(log n) amortized   |
//! | `remove_min` | O(log n) amortized   |
//!
//! # Example
//!
//! ```rust
//! use rust_order_statistics::dual::DualPriorityQueue;
//!
//! let mut queue = DualPriorityQueue::new();
//! for x in [5, 1, 8, 2] {
//!     queue.insert(x);
//! }
//!
//! assert_eq!(queue.get_max(), Some(&8));
//! assert_eq!(queue.get_min(), Some(&1));
//! assert_eq!(queue.remove_max(), Some(8));
//! assert_eq!(queue.remove_min(), Some(1));
//! assert_eq!(queue.get_max(), Some(&5));
//! assert_eq!(queue.get_min(), Some(&2));
//! ```

use crate::binary::{BinaryHeap, MaxHeap, MinHeap};
use crate::traits::Compare;
use log::trace;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Counted record of values pending lazy removal from one heap
///
/// Counts never go negative; a value with no pending removals has no entry.
#[derive(Debug, Clone)]
pub struct DeletionLedger<T: Eq + Hash> {
    pending: FxHashMap<T, usize>,
}

impl<T: Eq + Hash> DeletionLedger<T> {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self {
            pending: FxHashMap::default(),
        }
    }

    /// Records one more pending removal of `value`
    pub fn mark(&mut self, value: T) {
        *self.pending.entry(value).or_insert(0) += 1;
    }

    /// Consumes one pending removal of `value`
    ///
    /// Returns false, leaving the ledger untouched, if none is pending.
    pub fn take(&mut self, value: &T) -> bool {
        match self.pending.get_mut(value) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.pending.remove(value);
                true
            }
            None => false,
        }
    }

    /// Pending removals recorded for `value`
    pub fn pending(&self, value: &T) -> usize {
        self.pending.get(value).copied().unwrap_or(0)
    }

    /// Total pending removals across all values
    pub fn total(&self) -> usize {
        self.pending.values().sum()
    }

    /// Returns true if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Forgets every pending removal
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T: Eq + Hash> Default for DeletionLedger<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pops roots of `heap` for as long as `ledger` says they are stale
fn discard_stale<T, C>(heap: &mut BinaryHeap<T, C>, ledger: &mut DeletionLedger<T>)
where
    T: Eq + Hash,
    C: Compare<T>,
{
    let mut discarded = 0usize;
    while let Some(root) = heap.peek() {
        if !ledger.take(root) {
            break;
        }
        heap.pop();
        discarded += 1;
    }
    if discarded > 0 {
        trace!("lazy cleanup discarded {} stale entries", discarded);
    }
}

/// A multiset supporting both minimum and maximum extraction
///
/// Not thread-safe; wrap it in a lock to share it.
#[derive(Debug, Clone)]
pub struct DualPriorityQueue<T: Ord + Hash> {
    max_heap: MaxHeap<T>,
    min_heap: MinHeap<T>,
    /// Copies in `max_heap` already removed through `remove_min`
    stale_in_max: DeletionLedger<T>,
    /// Copies in `min_heap` already removed through `remove_max`
    stale_in_min: DeletionLedger<T>,
    len: usize,
}

impl<T: Ord + Hash + Clone> DualPriorityQueue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            max_heap: MaxHeap::new(),
            min_heap: MinHeap::new(),
            stale_in_max: DeletionLedger::new(),
            stale_in_min: DeletionLedger::new(),
            len: 0,
        }
    }

    /// Number of values logically in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue holds no values
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value
    pub fn insert(&mut self, value: T) {
        self.max_heap.push(value.clone());
        self.min_heap.push(value);
        self.len += 1;
    }

    /// Returns the largest value, or `None` if the queue is empty
    pub fn get_max(&mut self) -> Option<&T> {
        discard_stale(&mut self.max_heap, &mut self.stale_in_max);
        self.max_heap.peek()
    }

    /// Returns the smallest value, or `None` if the queue is empty
    pub fn get_min(&mut self) -> Option<&T> {
        discard_stale(&mut self.min_heap, &mut self.stale_in_min);
        self.min_heap.peek()
    }

    /// Removes and returns the largest value, or `None` if the queue is empty
    pub fn remove_max(&mut self) -> Option<T> {
        discard_stale(&mut self.max_heap, &mut self.stale_in_max);
        let max = self.max_heap.pop()?;
        self.stale_in_min.mark(max.clone());
        self.len -= 1;
        Some(max)
    }

    /// Removes and returns the smallest value, or `None` if the queue is empty
    pub fn remove_min(&mut self) -> Option<T> {
        discard_stale(&mut self.min_heap, &mut self.stale_in_min);
        let min = self.min_heap.pop()?;
        self.stale_in_max.mark(min.clone());
        self.len -= 1;
        Some(min)
    }

    /// Removes every value and every pending removal
    pub fn clear(&mut self) {
        self.max_heap.clear();
        self.min_heap.clear();
        self.stale_in_max.clear();
        self.stale_in_min.clear();
        self.len = 0;
    }
}

impl<T: Ord + Hash + Clone> Default for DualPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for DualPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
