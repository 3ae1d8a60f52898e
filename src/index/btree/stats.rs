//! Index operation statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by an [`OrderedIndex`](crate::OrderedIndex).
///
/// All fields are atomic so counters can be bumped through `&self`,
/// including from lookups. `Ordering::Relaxed` is enough everywhere:
/// we only need atomicity, not synchronization between counters —
/// statistics are eventually consistent by nature.
///
/// # Example
/// ```
/// use arbordb::IndexStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = IndexStats::new();
/// stats.search_hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.search_hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct IndexStats {
    /// Lookups that found their key.
    pub search_hits: AtomicU64,

    /// Lookups that came back empty.
    pub search_misses: AtomicU64,

    /// Entries newly added (overwrites excluded).
    pub inserts: AtomicU64,

    /// Inserts that replaced an existing value in place.
    pub overwrites: AtomicU64,

    /// Entries removed.
    pub removals: AtomicU64,

    /// Node splits performed while absorbing inserts.
    pub splits: AtomicU64,

    /// Sibling merges performed while repairing underflow.
    pub merges: AtomicU64,

    /// Entries rotated between siblings instead of merging.
    pub redistributions: AtomicU64,
}

impl IndexStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            search_hits: AtomicU64::new(0),
            search_misses: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            overwrites: AtomicU64::new(0),
            removals: AtomicU64::new(0),
            splits: AtomicU64::new(0),
            merges: AtomicU64::new(0),
            redistributions: AtomicU64::new(0),
        }
    }

    /// Calculate lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.search_hits.load(Ordering::Relaxed);
        let misses = self.search_misses.load(Ordering::Relaxed);
        let total = hits + misses;

        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            search_hits: self.search_hits.load(Ordering::Relaxed),
            search_misses: self.search_misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            overwrites: self.overwrites.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            splits: self.splits.load(Ordering::Relaxed),
            merges: self.merges.load(Ordering::Relaxed),
            redistributions: self.redistributions.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.search_hits.store(0, Ordering::Relaxed);
        self.search_misses.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.overwrites.store(0, Ordering::Relaxed);
        self.removals.store(0, Ordering::Relaxed);
        self.splits.store(0, Ordering::Relaxed);
        self.merges.store(0, Ordering::Relaxed);
        self.redistributions.store(0, Ordering::Relaxed);
    }
}

impl Default for IndexStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of index statistics.
///
/// Unlike [`IndexStats`], this is not atomic and can be safely printed,
/// compared, or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub search_hits: u64,
    pub search_misses: u64,
    pub inserts: u64,
    pub overwrites: u64,
    pub removals: u64,
    pub splits: u64,
    pub merges: u64,
    pub redistributions: u64,
}

impl StatsSnapshot {
    /// Calculate lookup hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.search_hits + self.search_misses;
        if total == 0 {
            0.0
        } else {
            self.search_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, splits: {}, merges: {}, hit_rate: {:.2}% }}",
            self.search_hits,
            self.search_misses,
            self.splits,
            self.merges,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = IndexStats::new();
        assert_eq!(stats.search_hits.load(Ordering::Relaxed), 0);
        assert_eq!(stats.search_misses.load(Ordering::Relaxed), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_hit_rate() {
        let stats = IndexStats::new();

        stats.search_hits.fetch_add(7, Ordering::Relaxed);
        stats.search_misses.fetch_add(3, Ordering::Relaxed);

        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_snapshot() {
        let stats = IndexStats::new();
        stats.search_hits.fetch_add(7, Ordering::Relaxed);
        stats.search_misses.fetch_add(3, Ordering::Relaxed);
        stats.splits.fetch_add(2, Ordering::Relaxed);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.search_hits, 7);
        assert_eq!(snapshot.search_misses, 3);
        assert_eq!(snapshot.splits, 2);
        assert_eq!(snapshot.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_reset() {
        let stats = IndexStats::new();
        stats.search_hits.fetch_add(100, Ordering::Relaxed);
        stats.merges.fetch_add(4, Ordering::Relaxed);

        stats.reset();

        assert_eq!(stats.search_hits.load(Ordering::Relaxed), 0);
        assert_eq!(stats.merges.load(Ordering::Relaxed), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = IndexStats::new();
        stats.search_hits.fetch_add(80, Ordering::Relaxed);
        stats.search_misses.fetch_add(20, Ordering::Relaxed);
        stats.splits.fetch_add(5, Ordering::Relaxed);

        let snapshot = stats.snapshot();
        let display = format!("{}", snapshot);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("misses: 20"));
        assert!(display.contains("80.00%"));
    }
}
