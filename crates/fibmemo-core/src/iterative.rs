//! Iterative calculator using the standard additive recurrence.
//!
//! Linear in `n`, so it is the slow reference; property tests cross-check
//! the fast-doubling engine against it.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::{validate_index, Calculator, FibError};

/// Iterative calculator over arbitrary-precision integers.
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for Iterative {
    fn calculate(&self, n: i64) -> Result<BigUint, FibError> {
        let index = validate_index(n)?;
        let mut a = BigUint::zero();
        let mut b = BigUint::one();
        for _ in 0..index {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        Ok(a)
    }

    fn name(&self) -> &str {
        "Iterative"
    }
}
