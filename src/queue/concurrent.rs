//! Mutex-guarded unbounded FIFO queue

use std::{collections::VecDeque, fmt, sync::Mutex};

use crate::{
    error::{RendezvousError, Result},
    sync::lock,
};

use super::stats::{QueueStats, QueueStatsSnapshot};

/// Unbounded FIFO queue shared between threads.
///
/// Every operation takes the queue's single lock for its whole duration.
/// `len`/`is_empty` are snapshots that may be stale by the time the caller
/// acts on them; `try_pop` is the only race-free read.
pub struct ThreadSafeQueue<T> {
    items: Mutex<VecDeque<T>>,
    stats: QueueStats,
}

impl<T> ThreadSafeQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with pre-allocated room for `capacity` elements.
    /// The queue still grows without bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            stats: QueueStats::default(),
        }
    }

    /// Append a value at the tail
    pub fn push(&self, value: T) {
        let mut items = lock(&self.items);
        items.push_back(value);
        self.stats.record_pushed(1, items.len());
    }

    /// Same as [`push`](Self::push)
    pub fn emplace(&self, value: T) {
        self.push(value);
    }

    /// Append every value of `values` under one lock acquisition, keeping
    /// their order contiguous in the queue
    pub fn extend<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = lock(&self.items);
        let before = items.len();
        items.extend(values);
        let added = items.len() - before;
        if added > 0 {
            self.stats.record_pushed(added, items.len());
        }
    }

    /// Remove and return the head element
    pub fn pop(&self) -> Result<T> {
        let mut items = lock(&self.items);
        let value = items
            .pop_front()
            .ok_or_else(|| RendezvousError::empty_queue("pop"))?;
        self.stats.record_popped(1);
        Ok(value)
    }

    /// Remove and return the head element if there is one.
    ///
    /// Checks emptiness and removes in the same critical section.
    pub fn try_pop(&self) -> Option<T> {
        let mut items = lock(&self.items);
        match items.pop_front() {
            Some(value) => {
                self.stats.record_popped(1);
                Some(value)
            }
            None => {
                self.stats.record_empty_poll();
                None
            }
        }
    }

    /// Move the head element into `out`. Returns `false` and leaves `out`
    /// untouched when the queue is empty.
    pub fn try_pop_into(&self, out: &mut T) -> bool {
        match self.try_pop() {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    /// Same as [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the queue currently holds no elements
    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }

    /// Same as [`is_empty`](Self::is_empty)
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Discard every queued element
    pub fn clear(&self) {
        let mut items = lock(&self.items);
        let removed = items.len();
        items.clear();
        self.stats.record_popped(removed);
    }

    /// Remove every queued element and return them in FIFO order
    pub fn drain(&self) -> Vec<T> {
        let mut items = lock(&self.items);
        let drained: Vec<T> = items.drain(..).collect();
        self.stats.record_popped(drained.len());
        drained
    }

    /// Snapshot of this queue's counters
    pub fn stats(&self) -> QueueStatsSnapshot {
        self.stats.snapshot()
    }

    /// Zero this queue's counters; queued elements are untouched
    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

impl<T: Clone> ThreadSafeQueue<T> {
    /// Copy of the head element
    pub fn front(&self) -> Result<T> {
        lock(&self.items)
            .front()
            .cloned()
            .ok_or_else(|| RendezvousError::empty_queue("front"))
    }

    /// Copy of the tail element
    pub fn back(&self) -> Result<T> {
        lock(&self.items)
            .back()
            .cloned()
            .ok_or_else(|| RendezvousError::empty_queue("back"))
    }
}

impl<T> Default for ThreadSafeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ThreadSafeQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadSafeQueue")
            .field("len", &self.len())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
