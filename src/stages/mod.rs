//! Lazy pipeline stages.
//!
//! Each stage wraps a source sequence plus a transform or predicate and is
//! itself a [`Sequence`](crate::Sequence): constructing one performs no work
//! on the source, and every `iterate()` call does the stage's work from
//! scratch with state owned by that iterator alone.
//!
//! Stages follow one of two enumeration disciplines, noted per type:
//!
//! - **live**: elements are pulled from the source on demand, so a source
//!   mutated between two iteration requests is observed in its current state;
//! - **buffering**: the stage's full output is computed the moment iteration
//!   begins, so each iterator holds a snapshot taken at `iterate()` time.

pub(crate) mod concat;
pub(crate) mod distinct;
pub(crate) mod filter;
pub(crate) mod partition;
pub(crate) mod reverse;
pub(crate) mod select;

pub use concat::Concat;
pub use distinct::Distinct;
pub use filter::{Filter, OfType};
pub use partition::{Skip, SkipWhile, Take, TakeWhile};
pub use reverse::Reverse;
pub use select::{Select, SelectMany};
