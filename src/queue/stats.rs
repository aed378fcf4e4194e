//! Queue statistics tracking

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// Per-queue counters, updated while the queue lock is held
#[derive(Debug, Default)]
pub struct QueueStats {
    /// Total elements pushed
    pub pushed: AtomicU64,
    /// Total elements removed (pop, try_pop, drain, clear)
    pub popped: AtomicU64,
    /// `try_pop` calls that found the queue empty
    pub empty_polls: AtomicU64,
    /// Largest depth observed
    pub peak_len: AtomicUsize,
}

impl QueueStats {
    /// Record `count` pushes leaving the queue at `len`
    pub fn record_pushed(&self, count: usize, len: usize) {
        self.pushed.fetch_add(count as u64, Ordering::Relaxed);
        self.peak_len.fetch_max(len, Ordering::Relaxed);
    }

    /// Record `count` removals
    pub fn record_popped(&self, count: usize) {
        self.popped.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a `try_pop` on an empty queue
    pub fn record_empty_poll(&self) {
        self.empty_polls.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of the counters
    pub fn snapshot(&self) -> QueueStatsSnapshot {
        QueueStatsSnapshot {
            pushed: self.pushed.load(Ordering::Relaxed),
            popped: self.popped.load(Ordering::Relaxed),
            empty_polls: self.empty_polls.load(Ordering::Relaxed),
            peak_len: self.peak_len.load(Ordering::Relaxed),
        }
    }

    /// Reset all statistics
    pub fn reset(&self) {
        self.pushed.store(0, Ordering::Relaxed);
        self.popped.store(0, Ordering::Relaxed);
        self.empty_polls.store(0, Ordering::Relaxed);
        self.peak_len.store(0, Ordering::Relaxed);
    }
}

/// Plain copy of [`QueueStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatsSnapshot {
    pub pushed: u64,
    pub popped: u64,
    pub empty_polls: u64,
    pub peak_len: usize,
}

impl QueueStatsSnapshot {
    /// Elements pushed but not yet removed
    pub fn in_flight(&self) -> u64 {
        self.pushed.saturating_sub(self.popped)
    }
}
