//! Statistics for the registry

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Registry-wide counters
#[derive(Debug, Default)]
pub struct RegistryStats {
    /// Total `acquire` calls, successful or not
    pub acquisitions: AtomicU64,
    /// Resources constructed
    pub created: AtomicU64,
    /// Acquisitions that joined a live resource
    pub reused: AtomicU64,
    /// Entries removed after their last handle dropped
    pub evicted: AtomicU64,
    /// Acquisitions rejected by the type tag check
    pub type_mismatches: AtomicU64,
}

impl RegistryStats {
    pub fn record_acquisition(&self) {
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reused(&self) {
        self.reused.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_evicted(&self) {
        self.evicted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_type_mismatch(&self) {
        self.type_mismatches.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the counters, pairing them with the current live entry count
    pub fn snapshot(&self, live_entries: usize) -> RegistryStatsSnapshot {
        RegistryStatsSnapshot {
            acquisitions: self.acquisitions.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
            type_mismatches: self.type_mismatches.load(Ordering::Relaxed),
            live_entries,
        }
    }
}

/// Plain copy of [`RegistryStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStatsSnapshot {
    pub acquisitions: u64,
    pub created: u64,
    pub reused: u64,
    pub evicted: u64,
    pub type_mismatches: u64,
    pub live_entries: usize,
}

impl RegistryStatsSnapshot {
    /// Fraction of successful acquisitions that joined an existing resource
    pub fn reuse_ratio(&self) -> f64 {
        let served = self.created + self.reused;
        if served == 0 {
            return 0.0;
        }

        self.reused as f64 / served as f64
    }
}
