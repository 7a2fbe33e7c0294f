//! Ordering strategies and the common error type
//!
//! This module provides the two strategies that configure an
//! [`IndexedHeap`](crate::IndexedHeap):
//!
//! - [`Precedence`]: decides which of two priority values ranks first.
//!   [`MinFirst`] and [`MaxFirst`] cover the common cases; [`OrderFn`] wraps
//!   an arbitrary comparison closure.
//! - [`PriorityKey`]: derives the priority value stored in the queue from
//!   the raw value handed to an insert or update. [`DirectKey`] stores the
//!   raw value as-is; [`KeyFn`] wraps a derivation closure.
//!
//! Both strategies are injected at construction and invoked through these
//! fixed interfaces, so the queue never has to re-derive or re-interpret a
//! priority on its own.

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation referenced a key that is not a member of the queue
    KeyNotFound,
    /// An insertion was attempted with a key that is already a member
    DuplicateKey,
    /// A top or pop style operation was attempted on an empty queue
    EmptyQueue,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyNotFound => write!(f, "key is not in the queue"),
            HeapError::DuplicateKey => write!(f, "key is already in the queue"),
            HeapError::EmptyQueue => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Decides which of two priority values takes precedence.
///
/// `precedes(a, b)` returns `true` when `a` ranks strictly before `b`, i.e.
/// an element carrying `a` would be popped before one carrying `b`. The
/// relation is expected to be a strict total order over the priority values
/// in use. An inconsistent relation produces an unspecified pop order, but
/// never loses elements or panics.
pub trait Precedence<P> {
    /// Returns `true` if `a` ranks strictly before `b`.
    fn precedes(&self, a: &P, b: &P) -> bool;
}

/// Min-queue precedence: smaller priority values rank first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

/// Max-queue precedence: larger priority values rank first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<P: Ord> Precedence<P> for MinFirst {
    fn precedes(&self, a: &P, b: &P) -> bool {
        a < b
    }
}

impl<P: Ord> Precedence<P> for MaxFirst {
    fn precedes(&self, a: &P, b: &P) -> bool {
        a > b
    }
}

/// Precedence defined by a comparison closure.
///
/// # Example
///
/// ```rust
/// use indexed_heap::{DirectKey, IndexedHeap, OrderFn};
///
/// // Rank by string length, shortest first.
/// let by_len = OrderFn(|a: &&str, b: &&str| a.len() < b.len());
/// let mut queue = IndexedHeap::with(by_len, DirectKey);
/// queue.insert(1, "pear").unwrap();
/// queue.insert(2, "fig").unwrap();
/// assert_eq!(queue.top(), Ok(&2));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFn<F>(pub F);

impl<P, F> Precedence<P> for OrderFn<F>
where
    F: Fn(&P, &P) -> bool,
{
    fn precedes(&self, a: &P, b: &P) -> bool {
        (self.0)(a, b)
    }
}

/// Derives the stored priority value from the raw value supplied to an
/// insert or update.
///
/// The derivation runs exactly once per insert or update and the result is
/// cached in the element's slot; comparisons never re-derive it. If the
/// meaning of an already-stored priority changes behind the queue's back,
/// [`IndexedHeap::heapify`](crate::IndexedHeap::heapify) is the repair path.
pub trait PriorityKey<V, P> {
    /// Computes the priority value for `value`.
    fn derive(&self, value: V) -> P;
}

/// Identity derivation: the raw value is the priority value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectKey;

impl<P> PriorityKey<P, P> for DirectKey {
    fn derive(&self, value: P) -> P {
        value
    }
}

/// Priority derivation defined by a closure.
///
/// # Example
///
/// ```rust
/// use indexed_heap::{IndexedHeap, KeyFn, MinFirst};
///
/// // Queue of jobs prioritized by their deadline field.
/// let mut queue = IndexedHeap::with(MinFirst, KeyFn(|job: (&str, u64)| job.1));
/// queue.insert("backup", ("nightly", 300)).unwrap();
/// queue.insert("report", ("weekly", 60)).unwrap();
/// assert_eq!(queue.top(), Ok(&"report"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyFn<F>(pub F);

impl<V, P, F> PriorityKey<V, P> for KeyFn<F>
where
    F: Fn(V) -> P,
{
    fn derive(&self, value: V) -> P {
        (self.0)(value)
    }
}
