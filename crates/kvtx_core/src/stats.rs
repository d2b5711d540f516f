//! Store statistics and telemetry.
//!
//! Counters are telemetry only; no store operation consults them. They are
//! atomic with relaxed ordering so read paths can stay `&self`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counters for a store.
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Total `get` calls.
    reads: AtomicU64,
    /// Total successful `put` calls.
    writes: AtomicU64,
    /// Total transactions started.
    transactions_started: AtomicU64,
    /// Total transactions committed.
    transactions_committed: AtomicU64,
    /// Total transactions rolled back.
    transactions_rolled_back: AtomicU64,
    /// Cumulative writes merged into committed state.
    keys_committed: AtomicU64,
}

impl StoreStats {
    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_begin(&self) {
        self.transactions_started.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_commit(&self, merged: u64) {
        self.transactions_committed.fetch_add(1, Ordering::Relaxed);
        self.keys_committed.fetch_add(merged, Ordering::Relaxed);
    }

    pub(crate) fn record_rollback(&self) {
        self.transactions_rolled_back.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time copy of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            transactions_started: self.transactions_started.load(Ordering::Relaxed),
            transactions_committed: self.transactions_committed.load(Ordering::Relaxed),
            transactions_rolled_back: self.transactions_rolled_back.load(Ordering::Relaxed),
            keys_committed: self.keys_committed.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of store counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Total `get` calls.
    pub reads: u64,
    /// Total successful `put` calls.
    pub writes: u64,
    /// Total transactions started.
    pub transactions_started: u64,
    /// Total transactions committed.
    pub transactions_committed: u64,
    /// Total transactions rolled back.
    pub transactions_rolled_back: u64,
    /// Cumulative writes merged into committed state.
    pub keys_committed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let stats = StoreStats::default();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn counters_accumulate() {
        let stats = StoreStats::default();
        stats.record_read();
        stats.record_read();
        stats.record_write();
        stats.record_begin();
        stats.record_commit(3);
        stats.record_rollback();

        let snap = stats.snapshot();
        assert_eq!(snap.reads, 2);
        assert_eq!(snap.writes, 1);
        assert_eq!(snap.transactions_started, 1);
        assert_eq!(snap.transactions_committed, 1);
        assert_eq!(snap.transactions_rolled_back, 1);
        assert_eq!(snap.keys_committed, 3);
    }
}
