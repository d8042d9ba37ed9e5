//! Order statistics built on binary heaps
//!
//! This crate composes a single array-backed binary heap into several
//! selection and streaming algorithms.
//!
//! # Features
//!
//! - **Binary Heap**: min-heap, max-heap or custom order from one generic structure; O(log n) push and pop
//! - **Top-K**: the K largest values of a stream in O(N log K)
//! - **K-Way Merge**: merges K sorted sequences in O(N log K), eagerly or as a lazy iterator
//! - **Dual Priority Queue**: min and max extraction over one multiset, with lazy deletion
//! - **Heap Validation**: O(n) check that a slice satisfies heap order
//! - **Running Median**: median of an unbounded stream with O(log n) insertion and O(1) query
//!
//! None of the structures are thread-safe. Empty reads return `None` (or
//! 0.0 for the median) rather than failing.
//!
//! # Example
//!
//! ```rust
//! use rust_order_statistics::dual::DualPriorityQueue;
//! use rust_order_statistics::median::RunningMedian;
//!
//! let mut queue = DualPriorityQueue::new();
//! queue.extend([5, 1, 8, 2]);
//! assert_eq!(queue.remove_max(), Some(8));
//! assert_eq!(queue.get_min(), Some(&1));
//!
//! let mut median = RunningMedian::new();
//! median.extend([1, 2, 3]);
//! assert_eq!(median.find_median(), 2.0);
//! ```

pub mod binary;
pub mod dual;
pub mod kmerge;
pub mod median;
pub mod top_k;
pub mod traits;
pub mod validate;

// Re-export the main traits and entry points for convenience
pub use binary::{BinaryHeap, MaxHeap, MinHeap};
pub use kmerge::merge_sorted;
pub use top_k::top_k;
pub use traits::{Compare, Heap, HeapError, MaxOrder, MinOrder};
pub use validate::is_min_heap;
