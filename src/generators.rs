//! Constant-sequence generators.
//!
//! These build trivial materialized sequences without an existing source:
//! a consecutive integer range, a repeated value, or nothing at all. Counts
//! are `usize`, so the "negative count" failure of loosely-typed query
//! layers cannot arise; the only reachable failure is integer overflow of a
//! generated range.

use crate::collections::List;
use crate::error::QueryError;

/// Generate `count` consecutive integers beginning at `start`.
///
/// Fails with [`QueryError::RangeOverflow`] when `start + count - 1` would
/// exceed `i32::MAX`.
///
/// # Example
/// ```
/// use quarry::generators::range;
///
/// let r = range(1, 5).unwrap();
/// assert_eq!(r.into_vec(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn range(start: i32, count: usize) -> Result<List<i32>, QueryError> {
    if count == 0 {
        return Ok(List::new());
    }
    let Ok(count_wide) = i64::try_from(count) else {
        return Err(QueryError::RangeOverflow { start, count });
    };
    let last = i64::from(start) + count_wide - 1;
    if last > i64::from(i32::MAX) {
        return Err(QueryError::RangeOverflow { start, count });
    }

    Ok((i64::from(start)..=last).map(|value| value as i32).collect())
}

/// Generate `count` copies of `value`.
///
/// # Example
/// ```
/// use quarry::generators::repeat;
///
/// let r = repeat("a", 3);
/// assert_eq!(r.into_vec(), vec!["a", "a", "a"]);
/// ```
#[must_use]
pub fn repeat<T: Clone>(value: T, count: usize) -> List<T> {
    List::from(vec![value; count])
}

/// A sequence with no elements.
#[must_use]
pub fn empty<T>() -> List<T> {
    List::new()
}
