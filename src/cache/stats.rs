//! Cache Statistics Module
//!
//! Counts reads and writes seen by the in-memory cache.

// == Cache Stats ==
/// Hit, miss and write counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Reads that returned a live entry
    pub hits: u64,
    /// Reads that found nothing or an expired entry
    pub misses: u64,
    /// Writes performed
    pub writes: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total reads, hits and misses together.
    pub fn reads(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.reads(), 0);
        assert_eq!(stats.writes, 0);
    }

    #[test]
    fn test_counters_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_write();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.reads(), 2);
        assert_eq!(stats.writes, 1);
    }
}
