//! Running median over an unbounded stream
//!
//! The stream is split into two halves:
//!
//! - `lower`: a [`MaxHeap`] holding the smaller half, its root is the largest
//!   of the small values
//! - `upper`: a [`MinHeap`] holding the larger half, its root is the smallest
//!   of the large values
//!
//! After every insertion `lower` holds either as many values as `upper` or
//! exactly one more, and every value in `lower` is `<=` every value in
//! `upper`. The median is then `lower`'s root (odd count) or the mean of both
//! roots (even count).
//!
//! # Example
//!
//! ```rust
//! use rust_order_statistics::median::RunningMedian;
//!
//! let mut median = RunningMedian::new();
//! let mut seen = Vec::new();
//! for x in [1, 2, 3, 4] {
//!     median.add_num(x);
//!     seen.push(median.find_median());
//! }
//! assert_eq!(seen, vec![1.0, 1.5, 2.0, 2.5]);
//! ```

use crate::binary::{MaxHeap, MinHeap};

/// Tracks the median of every value added so far
///
/// Values must convert losslessly to `f64` so that the mean of the two
/// middle values can be computed in floating point.
#[derive(Debug, Clone)]
pub struct RunningMedian<T: Ord> {
    lower: MaxHeap<T>,
    upper: MinHeap<T>,
}

impl<T: Ord + Copy + Into<f64>> RunningMedian<T> {
    /// Creates an estimator over an empty stream
    pub fn new() -> Self {
        Self {
            lower: MaxHeap::new(),
            upper: MinHeap::new(),
        }
    }

    /// Adds a value to the stream in O(log n)
    pub fn add_num(&mut self, value: T) {
        let above_lower = matches!(self.lower.peek(), Some(&top) if value > top);
        if above_lower {
            self.upper.push(value);
        } else {
            self.lower.push(value);
        }

        if self.lower.len() > self.upper.len() + 1 {
            if let Some(moved) = self.lower.pop() {
                self.upper.push(moved);
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(moved) = self.upper.pop() {
                self.lower.push(moved);
            }
        }
    }

    /// The median of the stream, or 0.0 if nothing was added
    pub fn find_median(&self) -> f64 {
        self.median().unwrap_or(0.0)
    }

    /// The median of the stream, or `None` if nothing was added
    pub fn median(&self) -> Option<f64> {
        let low: f64 = (*self.lower.peek()?).into();
        if self.lower.len() > self.upper.len() {
            return Some(low);
        }
        let high = self.upper.peek().map(|&v| v.into()).unwrap_or(low);
        Some((low + high) / 2.0)
    }

    /// Number of values added
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Returns true if nothing was added
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

impl<T: Ord + Copy + Into<f64>> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Copy + Into<f64>> Extend<T> for RunningMedian<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_num(value);
        }
    }
}
