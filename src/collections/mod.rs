//! Materialized result containers.
//!
//! Eager operators hand their results back in one of two owned containers:
//! [`List`] preserves insertion order and multiplicity, [`OrderedSet`]
//! enforces uniqueness while remembering first-insertion order. Both are
//! sequences in their own right, so a materialized result can be queried
//! again without conversion.

pub(crate) mod list;
pub(crate) mod ordered_set;

pub use list::List;
pub use ordered_set::OrderedSet;
