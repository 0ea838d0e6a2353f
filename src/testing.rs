//! Testing utilities for query pipelines.
//!
//! Assertion helpers for comparing query output with expected results, plus
//! the [`assert_approx_eq!`](crate::assert_approx_eq) macro for
//! floating-point averages. All helpers take any [`Sequence`], so they work
//! on un-materialized stages and materialized containers alike.
//!
//! ```
//! use quarry::Query;
//! use quarry::testing::assert_sequence_equal;
//!
//! let doubled = vec![1, 2, 3].select(|n| n * 2);
//! assert_sequence_equal(&doubled, &[2, 4, 6]);
//! ```

use crate::sequence::Sequence;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that a sequence yields exactly `expected`, in order.
///
/// # Panics
/// Panics with a detailed message if the lengths or any element differ.
pub fn assert_sequence_equal<S>(actual: &S, expected: &[S::Item])
where
    S: Sequence,
    S::Item: Debug + PartialEq,
{
    let actual: Vec<S::Item> = actual.iterate().collect();
    assert_eq!(
        actual.len(),
        expected.len(),
        "sequence length mismatch:\n  expected length: {}\n  actual length: {}\n  expected: {expected:?}\n  actual: {actual:?}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "sequence mismatch at index {i}:\n  expected: {e:?}\n  actual: {a:?}\n  full expected: {expected:?}\n  full actual: {actual:?}"
        );
    }
}

/// Assert that a sequence yields the same elements as `expected`, ignoring
/// order.
///
/// # Panics
/// Panics if the lengths differ or either side holds a value the other
/// does not.
pub fn assert_sequence_unordered_equal<S>(actual: &S, expected: &[S::Item])
where
    S: Sequence,
    S::Item: Debug + Eq + Hash,
{
    let actual: Vec<S::Item> = actual.iterate().collect();
    assert_eq!(
        actual.len(),
        expected.len(),
        "sequence length mismatch:\n  expected: {expected:?}\n  actual: {actual:?}"
    );
    let actual_set: HashSet<&S::Item> = actual.iter().collect();
    let expected_set: HashSet<&S::Item> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!(
            "sequence content mismatch:\n  missing: {missing:?}\n  extra: {extra:?}\n  expected: {expected:?}\n  actual: {actual:?}"
        );
    }
}

/// Assert that every yielded element satisfies `predicate`.
///
/// # Panics
/// Panics naming the first offending element.
pub fn assert_all<S, P>(sequence: &S, predicate: P)
where
    S: Sequence,
    S::Item: Debug,
    P: Fn(&S::Item) -> bool,
{
    for (i, item) in sequence.iterate().enumerate() {
        assert!(
            predicate(&item),
            "element at index {i} failed the predicate: {item:?}"
        );
    }
}

/// Assert that at least one yielded element satisfies `predicate`.
///
/// # Panics
/// Panics if no element satisfies it.
pub fn assert_any<S, P>(sequence: &S, predicate: P)
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    assert!(
        sequence.iterate().any(|item| predicate(&item)),
        "no element satisfied the predicate"
    );
}

/// Assert that no yielded element satisfies `predicate`.
///
/// # Panics
/// Panics naming the first offending element.
pub fn assert_none<S, P>(sequence: &S, predicate: P)
where
    S: Sequence,
    S::Item: Debug,
    P: Fn(&S::Item) -> bool,
{
    for (i, item) in sequence.iterate().enumerate() {
        assert!(
            !predicate(&item),
            "element at index {i} unexpectedly satisfied the predicate: {item:?}"
        );
    }
}

/// Check that a floating-point value is within an acceptable tolerance.
///
/// # Usage
/// ```
/// use quarry::assert_approx_eq;
///
/// assert_approx_eq!(0.1 + 0.2, 0.3, 1e-9);
/// assert_approx_eq!(2.0, 2.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr) => {
        $crate::assert_approx_eq!($actual, $expected, 1e-10)
    };
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        let epsilon: f64 = $epsilon;
        let diff = (actual - expected).abs();
        assert!(
            diff <= epsilon,
            "assertion failed: `(left ≈ right)`\n  left: `{actual:?}`,\n right: `{expected:?}`,\n  diff: `{diff:?}`,\n   eps: `{epsilon:?}`"
        );
    }};
}
