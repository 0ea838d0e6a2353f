//! # Quarry
//!
//! A **fluent query algebra** over finite, re-iterable in-memory sequences:
//! SQL-like expressiveness (filter, project, order, aggregate, set-combine)
//! without writing manual loops.
//!
//! ## Key Features
//!
//! - **Deferred execution** - lazy stages build a query; work happens when
//!   iteration begins or an eager operator consumes the source
//! - **Re-iterable sequences** - every declared query can be enumerated any
//!   number of times, each iteration independent of the others
//! - **Eager scalar operators** - count, fold, sum/average, min/max,
//!   first/last/single with "or-default" variants, element lookup
//! - **Set combination** - union, intersect, except, distinct, backed by an
//!   insertion-ordered uniqueness-enforcing container
//! - **Stable ordering and grouping** - keyed stable sort and single-pass
//!   grouping with caller-supplied key selectors
//! - **Typed errors** - eager operators return [`QueryError`] instead of
//!   panicking; "or-default" variants return `None` instead of failing
//! - **Type-safe** - capability bounds (`Ord` keys, `Eq + Hash` values) are
//!   required only by the operators that need them
//!
//! ## Quick Start
//!
//! ```
//! use quarry::*;
//!
//! # fn main() -> Result<(), QueryError> {
//! let orders = vec![
//!     ("alice", 120), ("bob", 40), ("alice", 80), ("carol", 200),
//! ];
//!
//! let big_spenders = orders
//!     .filter(|(_, amount)| *amount >= 50)
//!     .select(|(name, _)| name.to_string())
//!     .distinct()
//!     .order_by(|name| name.clone());
//!
//! assert_eq!(big_spenders, vec!["alice".to_string(), "carol".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequence
//!
//! A [`Sequence`] is the minimal capability: hand out a fresh, independent
//! iterator on every request. `Vec<T>`, arrays, the materialized containers
//! [`List`] and [`OrderedSet`], every lazy stage, and references to any of
//! them all implement it.
//!
//! ### Lazy vs. eager operators
//!
//! Lazy operators ([`filter`](Query::filter), [`select`](Query::select),
//! [`select_many`](Query::select_many), [`skip`](Query::skip)/
//! [`take`](Query::take) and their predicate-bounded forms,
//! [`distinct`](Query::distinct), [`concat`](Query::concat),
//! [`reverse`](Query::reverse)) return a new sequence and do no work at
//! call time. Eager operators ([`count`](Query::count),
//! [`aggregate`](Query::aggregate), [`first`](Query::first),
//! [`order_by`](Query::order_by), [`union`](Query::union), …) enumerate the
//! source to completion before returning.
//!
//! Each lazy stage creates its per-iteration state from scratch on every
//! `iterate()` call. The tracking set behind `distinct()` is owned by one
//! iterator and never shared, so two concurrent enumerations of the same
//! declared query cannot contaminate each other.
//!
//! ### Generators
//!
//! [`range`], [`repeat`], and [`empty`] build trivial constant sequences:
//!
//! ```
//! use quarry::*;
//!
//! assert_eq!(range(1, 5).unwrap(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(repeat("a", 3), vec!["a", "a", "a"]);
//! assert_eq!(empty::<i32>().count(), 0);
//! ```
//!
//! ### Errors and sentinels
//!
//! Operators that require at least one (or exactly one) qualifying element
//! fail with a [`QueryError`]; their `_or_default` counterparts return
//! `None` instead:
//!
//! ```
//! use quarry::*;
//!
//! let none = empty::<i32>();
//! assert_eq!(none.first(), Err(QueryError::NoElements));
//! assert_eq!(none.first_or_default(), None);
//! ```
//!
//! ### Float keys
//!
//! `f64` does not implement `Ord`; wrap float keys in
//! [`OrderedFloat`] (re-exported here) for
//! [`order_by`](Query::order_by) / [`min_by_key`](Query::min_by_key) /
//! [`max_by_key`](Query::max_by_key):
//!
//! ```
//! use quarry::*;
//!
//! let readings = vec![2.5_f64, 1.25, 3.75];
//! let top = readings.max_by_key(|r| OrderedFloat(*r)).unwrap();
//! assert_eq!(top, 3.75);
//! ```
//!
//! ## Concurrency
//!
//! There is none, on purpose. Every operator runs synchronously on the
//! calling thread; callers needing parallel evaluation partition work
//! outside this layer.
//!
//! ## Module Overview
//!
//! - [`sequence`] - the [`Sequence`] capability and its implementations
//! - [`query`] - the [`Query`] operator surface
//! - [`stages`] - lazy pipeline stage types and their enumeration
//!   disciplines
//! - [`collections`] - the materialized containers [`List`] and
//!   [`OrderedSet`]
//! - [`numeric`] - the [`Numeric`] capability behind sum/average
//! - [`generators`] - [`range`], [`repeat`], [`empty`]
//! - [`error`] - [`QueryError`]
//! - [`testing`] - assertion helpers for query tests

pub mod collections;
pub mod error;
pub mod generators;
pub mod numeric;
pub mod query;
pub mod sequence;
pub mod stages;
pub mod testing;

pub use collections::{List, OrderedSet};
pub use error::QueryError;
pub use generators::{empty, range, repeat};
pub use numeric::Numeric;
pub use query::Query;
pub use sequence::{SeqIter, Sequence};

pub use ordered_float::OrderedFloat;
