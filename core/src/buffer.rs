//! Fixed-capacity FIFO buffer.
//!
//! Reads broadly, writes narrowly: [`BoundedBuffer::insert_all`] accepts any
//! source whose items convert *into* the element type, and
//! [`BoundedBuffer::drain_to`] writes into any [`Sink`] that accepts the
//! element type.

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::mem;
use std::num::NonZeroUsize;

use thiserror::Error;
use tracing::debug;

use crate::sink::Sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("capacity must be positive")]
    ZeroCapacity,
}

/// Validated buffer capacity. Zero is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    pub fn new(value: usize) -> Result<Self, BufferError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(BufferError::ZeroCapacity)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Capacity {
    type Error = BufferError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A FIFO container that never holds more than its capacity.
///
/// # Invariants
///
/// - `len() <= capacity()` at all times
/// - Capacity is fixed at construction
/// - Elements leave in insertion order, except for those a drain pulls out
#[derive(Debug, Clone)]
pub struct BoundedBuffer<T> {
    items: VecDeque<T>,
    capacity: Capacity,
}

impl<T> BoundedBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Ok(Self::with_capacity(Capacity::new(capacity)?))
    }

    #[must_use]
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Append `item` if there is room.
    ///
    /// Returns `false` and leaves the buffer untouched when full.
    pub fn insert(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push_back(item);
        true
    }

    /// Remove the front element. `None` when empty.
    pub fn remove(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Append as many leading items of `source` as fit, in source order.
    ///
    /// Best effort: never fails, and returns how many were taken. Items past
    /// the remaining room are not pulled from the iterator at all, so when the
    /// buffer fills the truncation log relies on the source's `size_hint` and
    /// may fire for a source that had nothing left.
    pub fn insert_all<I>(&mut self, source: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let room = self.remaining();
        let before = self.items.len();
        let mut source = source.into_iter();
        self.items.extend(source.by_ref().take(room).map(Into::into));
        let added = self.items.len() - before;

        if added == room && may_have_more(&source) {
            debug!(
                capacity = self.capacity.get(),
                added, "bulk insert stopped at capacity"
            );
        }
        added
    }

    /// Move every element matching `predicate` into `sink`, front to back.
    ///
    /// Single pass: each element is tested once. Moved elements reach the sink
    /// in buffer order; the rest stay behind in their original relative order.
    pub fn drain_to<S, P>(&mut self, sink: &mut S, mut predicate: P) -> usize
    where
        S: Sink<T> + ?Sized,
        P: FnMut(&T) -> bool,
    {
        let mut kept = VecDeque::with_capacity(self.capacity.get());
        let mut moved = 0;
        for item in mem::take(&mut self.items) {
            if predicate(&item) {
                sink.accept(item);
                moved += 1;
            } else {
                kept.push_back(item);
            }
        }
        self.items = kept;
        moved
    }

    /// The front element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Elements front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity.get()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Free slots left before the buffer is full.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.get() - self.items.len()
    }
}

impl<'a, T> IntoIterator for &'a BoundedBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// False only when `iter` is known to be exhausted.
fn may_have_more<I: Iterator>(iter: &I) -> bool {
    iter.size_hint() != (0, Some(0))
}
