//! # fibmemo-core
//!
//! Core library for the fibmemo Fibonacci engine. Implements memoized
//! Fast Doubling plus iterative and fixed-width reference calculators.

pub mod calculator;
pub mod checked;
pub mod constants;
pub mod doubling;
pub mod iterative;
pub mod memo;
pub mod registry;

// Re-exports
pub use calculator::{Calculator, FibError};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use doubling::MemoizedFastDoubling;
pub use memo::{MemoStats, MemoTable};
pub use registry::{CalculatorFactory, DefaultFactory};

use num_bigint::BigUint;

/// Compute F(n) using memoized fast doubling.
///
/// This is a convenience function for simple use cases. It builds a fresh
/// engine with its own memo table; hold a [`MemoizedFastDoubling`] instance
/// instead to reuse cached sub-results across calls.
///
/// # Example
/// ```
/// assert_eq!(fibmemo_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibmemo_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    MemoizedFastDoubling::new().fib(n)
}
