//! Property-based tests for the Fibonacci calculators.

use std::sync::Arc;

use num_bigint::BigUint;
use proptest::prelude::*;

use fibmemo_core::calculator::Calculator;
use fibmemo_core::checked::CheckedU64;
use fibmemo_core::doubling::MemoizedFastDoubling;
use fibmemo_core::iterative::Iterative;

/// Fast doubling equals the iterative reference for every n in [0, 1000].
#[test]
fn fast_matches_iterative_exhaustive() {
    let engine = MemoizedFastDoubling::new();
    let mut a = BigUint::from(0u32);
    let mut b = BigUint::from(1u32);
    for n in 0u64..=1000 {
        assert_eq!(engine.fib(n), a, "F({n}) mismatch");
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
}

/// Monotonicity: F(n+1) >= F(n) for all n >= 1 up to 1000.
#[test]
fn monotone_from_one() {
    let engine = MemoizedFastDoubling::new();
    let mut prev = engine.fib(1);
    for n in 2u64..=1000 {
        let current = engine.fib(n);
        assert!(current >= prev, "F({n}) < F({})", n - 1);
        prev = current;
    }
}

/// Concurrent callers sharing one engine all observe the correct value.
#[test]
fn shared_engine_is_thread_safe() {
    let engine = Arc::new(MemoizedFastDoubling::new());
    let expected = MemoizedFastDoubling::new().fib(5000);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || engine.fib(5000))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Fast doubling and the iterative reference agree for random n.
    #[test]
    fn fast_equals_iterative(n in 0i64..2000) {
        let fast = MemoizedFastDoubling::new().calculate(n).unwrap();
        let iterative = Iterative::new().calculate(n).unwrap();
        prop_assert_eq!(fast, iterative, "F({}) fast != iterative", n);
    }

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_recurrence(n in 0i64..2000) {
        let engine = MemoizedFastDoubling::new();
        let fn0 = engine.calculate(n).unwrap();
        let fn1 = engine.calculate(n + 1).unwrap();
        let fn2 = engine.calculate(n + 2).unwrap();
        prop_assert_eq!(&fn0 + &fn1, fn2, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// Repeated calls on one engine return identical values.
    #[test]
    fn repeated_calls_are_idempotent(n in 0i64..2000) {
        let engine = MemoizedFastDoubling::new();
        let first = engine.calculate(n).unwrap();
        let second = engine.calculate(n).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every calculator rejects negative indices the same way.
    #[test]
    fn negative_indices_rejected(n in i64::MIN..0) {
        let calculators: [&dyn Calculator; 3] =
            [&MemoizedFastDoubling::new(), &Iterative::new(), &CheckedU64::new()];
        for calc in calculators {
            prop_assert!(calc.calculate(n).is_err(), "{} accepted {}", calc.name(), n);
        }
    }
}
