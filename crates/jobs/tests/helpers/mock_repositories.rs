#![allow(dead_code)]

use breach_checker_application::ports::CacheMaintenance;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

// ============================================================================
// Mock CacheMaintenance
// ============================================================================

/// Pretends to hold `expired` dead entries that the first purge removes.
pub struct MockCacheMaintenance {
    expired: AtomicUsize,
    live: usize,
    purge_calls: AtomicU64,
}

impl MockCacheMaintenance {
    pub fn new(expired: usize, live: usize) -> Self {
        Self {
            expired: AtomicUsize::new(expired),
            live,
            purge_calls: AtomicU64::new(0),
        }
    }

    pub fn purge_calls(&self) -> u64 {
        self.purge_calls.load(Ordering::SeqCst)
    }
}

impl CacheMaintenance for MockCacheMaintenance {
    fn purge_expired(&self) -> usize {
        self.purge_calls.fetch_add(1, Ordering::SeqCst);
        self.expired.swap(0, Ordering::SeqCst)
    }

    fn entry_count(&self) -> usize {
        self.live + self.expired.load(Ordering::SeqCst)
    }
}
