//! K-way merge of sorted sequences
//!
//! Keeps a min-heap of [`MergeCursor`]s, one per source sequence that still
//! has elements. Each step pops the smallest cursor, yields its value and,
//! if that source has a next element, pushes a cursor for it. At most one
//! cursor per source is ever live in the heap, so the heap never holds more
//! than K entries.
//!
//! Every input must already be non-decreasing. Unsorted input is not
//! detected and produces an unspecified interleaving. Equal values from
//! different sources come out in heap order, not by source index.
//!
//! # Time Complexity
//!
//! O(N log K) for N total elements across K sequences.
//!
//! # Example
//!
//! ```rust
//! use rust_order_statistics::kmerge::{merge_sorted, KMerge};
//!
//! let lists = vec![vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]];
//! assert_eq!(merge_sorted(&lists), vec![1, 1, 2, 3, 4, 4, 5, 6]);
//!
//! let first_three: Vec<&i32> = KMerge::new(&lists).take(3).collect();
//! assert_eq!(first_three, vec![&1, &1, &2]);
//! ```

use crate::binary::BinaryHeap;
use crate::traits::Compare;
use std::cmp::Ordering;

/// One in-flight candidate: a value and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCursor<'a, T> {
    /// The candidate value
    pub value: &'a T,
    /// Index of the source sequence
    pub source: usize,
    /// Position of `value` within its source
    pub position: usize,
}

/// Orders cursors by their value only
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl<'a, T: Ord> Compare<MergeCursor<'a, T>> for ByValue {
    fn compare(&self, a: &MergeCursor<'a, T>, b: &MergeCursor<'a, T>) -> Ordering {
        a.value.cmp(b.value)
    }
}

/// Lazy iterator over the merge of several sorted slices
#[derive(Debug, Clone)]
pub struct KMerge<'a, T: Ord> {
    sources: Vec<&'a [T]>,
    heads: BinaryHeap<MergeCursor<'a, T>, ByValue>,
    remaining: usize,
}

impl<'a, T: Ord> KMerge<'a, T> {
    /// Seeds the merge with the first element of every non-empty sequence
    pub fn new<S: AsRef<[T]>>(sequences: &'a [S]) -> Self {
        let sources: Vec<&'a [T]> = sequences.iter().map(AsRef::as_ref).collect();
        let remaining = sources.iter().map(|s| s.len()).sum();

        let seeds = sources
            .iter()
            .enumerate()
            .filter_map(|(source, seq)| {
                seq.first().map(|value| MergeCursor {
                    value,
                    source,
                    position: 0,
                })
            })
            .collect();

        Self {
            sources,
            heads: BinaryHeap::from_vec(seeds),
            remaining,
        }
    }

    /// The cursor that will be yielded next, if any
    pub fn peek_cursor(&self) -> Option<&MergeCursor<'a, T>> {
        self.heads.peek()
    }

    /// Number of sources that still have a live cursor
    pub fn active_sources(&self) -> usize {
        self.heads.len()
    }
}

impl<'a, T: Ord> Iterator for KMerge<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.heads.pop()?;
        self.remaining -= 1;

        let next_position = cursor.position + 1;
        if let Some(value) = self.sources[cursor.source].get(next_position) {
            self.heads.push(MergeCursor {
                value,
                source: cursor.source,
                position: next_position,
            });
        }

        Some(cursor.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Ord> ExactSizeIterator for KMerge<'a, T> {}

impl<'a, T: Ord> std::iter::FusedIterator for KMerge<'a, T> {}

/// Merges individually sorted sequences into one sorted vector
///
/// The output is a permutation of the concatenated inputs. Empty inputs and
/// an empty list of inputs are both fine.
pub fn merge_sorted<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    KMerge::new(sequences).cloned().collect()
}
