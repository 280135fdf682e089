//! Injectable memo table shared by the recursive fast-doubling calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use num_bigint::BigUint;
use parking_lot::RwLock;

/// Snapshot of memo table hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Number of lookups answered from the table.
    pub hits: u64,
    /// Number of lookups that required a computation.
    pub misses: u64,
}

/// Mapping from a Fibonacci index `n` to the exact value of F(n).
///
/// Entries are inserted lazily as indices are first requested and are never
/// evicted. The table is safe to share across threads: lookups and inserts
/// are individually guarded, and a lost check-then-insert race only means
/// the same value is recomputed and re-inserted, which is idempotent.
pub struct MemoTable {
    entries: RwLock<HashMap<u64, BigUint>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoTable {
    /// Create an empty memo table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up F(n), recording a hit or a miss.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<BigUint> {
        let cached = self.entries.read().get(&n).cloned();
        if cached.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        cached
    }

    /// Store F(n).
    pub fn insert(&self, n: u64, value: BigUint) {
        self.entries.write().insert(n, value);
    }

    /// Number of cached indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Take a snapshot of the hit/miss counters.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}
