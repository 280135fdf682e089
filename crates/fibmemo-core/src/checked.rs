//! Fixed-width u64 calculator demonstrating the overflow failure mode.
//!
//! A fixed-width result type cannot represent F(n) for n >= 94, so this
//! calculator fails with [`FibError::Overflow`] where the big-integer
//! engine keeps going. It exists to make that contrast testable.

use num_bigint::BigUint;

use crate::calculator::{validate_index, Calculator, FibError};

/// Calculator that computes in `u64` with checked arithmetic.
///
/// Succeeds through n = 93 (the largest index whose value fits in `u64`)
/// and fails with `Overflow` from n = 94 on.
pub struct CheckedU64;

impl CheckedU64 {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckedU64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for CheckedU64 {
    fn calculate(&self, n: i64) -> Result<BigUint, FibError> {
        let index = validate_index(n)?;
        if index < 2 {
            return Ok(BigUint::from(index));
        }

        let mut a: u64 = 0;
        let mut b: u64 = 1;
        for _ in 2..=index {
            let next = a.checked_add(b).ok_or(FibError::Overflow(index))?;
            a = std::mem::replace(&mut b, next);
        }
        Ok(BigUint::from(b))
    }

    fn name(&self) -> &str {
        "CheckedU64"
    }
}
