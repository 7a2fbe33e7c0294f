//! Indexed Priority Queue for Rust
//!
//! This crate provides [`IndexedHeap`], a binary heap of `(key, priority)`
//! pairs combined with a hash index that maps every key to its current heap
//! position. The heap and the index are kept synchronized through every
//! operation, which is what turns a plain heap into an updatable schedule:
//!
//! - O(1) access to the highest-precedence element
//! - O(1) lookup of any member's priority by key
//! - O(log n) insertion and removal of the top element
//! - O(log n) update or removal of *any* member, addressed by key
//!
//! Precedence is configurable: [`MinHeap`] and [`MaxHeap`] cover the usual
//! numeric orderings, and any strict comparison can be injected through the
//! [`Precedence`] strategy. A [`PriorityKey`] function can additionally
//! derive the stored priority from a richer value at insertion time; the
//! derived priority is cached so comparisons never recompute it.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::MinHeap;
//!
//! let mut queue = MinHeap::new();
//! queue.insert("apply", 3).unwrap();
//! queue.insert("fetch", 1).unwrap();
//! queue.insert("retry", 5).unwrap();
//!
//! // Any member can be re-prioritized in O(log n).
//! queue.update(&"retry", 0).unwrap();
//! assert_eq!(queue.top(), Ok(&"retry"));
//!
//! // Draining yields elements in priority order.
//! let order: Vec<_> = queue.drain_sorted().map(|(key, _)| key).collect();
//! assert_eq!(order, vec!["retry", "fetch", "apply"]);
//! ```

pub mod heap;
pub mod traits;

// Re-export the public surface at the crate root for convenience
pub use heap::{DrainSorted, IndexedHeap, IntoSortedIter, MaxHeap, MinHeap};
pub use traits::{
    DirectKey, HeapError, KeyFn, MaxFirst, MinFirst, OrderFn, Precedence, PriorityKey,
};
