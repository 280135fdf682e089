//! Memoized Fast Doubling Fibonacci engine.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k)) = F(k)^2 + 2*F(k)*F(k-1)
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Each recursion level halves the index, so a cold computation touches
//! O(log n) distinct indices. Every computed index lands in the memo table,
//! and later calls for the same or overlapping ranges return cached values
//! without recursing.

use num_bigint::BigUint;
use num_integer::Integer;
use tracing::{debug, trace};

use crate::calculator::{validate_index, Calculator, FibError};
use crate::memo::MemoTable;

/// Fast Doubling calculator with an injectable memo table.
///
/// # Example
/// ```
/// use fibmemo_core::calculator::Calculator;
/// use fibmemo_core::doubling::MemoizedFastDoubling;
///
/// let engine = MemoizedFastDoubling::new();
/// let result = engine.calculate(100).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct MemoizedFastDoubling {
    memo: MemoTable,
}

impl MemoizedFastDoubling {
    /// Create an engine with a fresh, empty memo table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(MemoTable::new())
    }

    /// Create an engine that owns the given memo table.
    #[must_use]
    pub fn with_table(memo: MemoTable) -> Self {
        Self { memo }
    }

    /// Access the memo table for inspection.
    #[must_use]
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Compute F(n) for an already-validated index.
    #[must_use]
    pub fn fib(&self, n: u64) -> BigUint {
        if let Some(cached) = self.memo.get(n) {
            trace!(n, "memo hit");
            return cached;
        }

        let value = if n < 2 {
            BigUint::from(n)
        } else if n.is_odd() {
            // F(2k+1) = F(k)^2 + F(k+1)^2
            let k = (n - 1) / 2;
            let fk = self.fib(k);
            let fk1 = self.fib(k + 1);
            &fk * &fk + &fk1 * &fk1
        } else {
            // F(2k) = F(k)^2 + 2*F(k)*F(k-1)
            let k = n / 2;
            let half = self.fib(k);
            let prev = self.fib(k - 1);
            &half * &half + ((&half * &prev) << 1)
        };

        self.memo.insert(n, value.clone());
        value
    }
}

impl Default for MemoizedFastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for MemoizedFastDoubling {
    fn calculate(&self, n: i64) -> Result<BigUint, FibError> {
        let index = validate_index(n)?;
        let value = self.fib(index);
        debug!(
            n = index,
            bits = value.bits(),
            cached = self.memo.len(),
            "fast doubling complete"
        );
        Ok(value)
    }

    fn name(&self) -> &str {
        "MemoizedFastDoubling"
    }
}
