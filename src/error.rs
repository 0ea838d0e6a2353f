//! Error types for eager query operators.
//!
//! Lazy stages never fail at construction time: predicates, selectors, and
//! second sequences are all mandatory parameters, so the "argument is absent"
//! failures of dynamically-typed query layers are unrepresentable here. What
//! remains are the two families an eager operator can hit at evaluation time:
//! an operation that requires at least one (or exactly one) qualifying
//! element, and a numeric parameter that falls outside the sequence or the
//! integer representation.

use thiserror::Error;

/// Failure raised by an eager query operator.
///
/// Caller-supplied closures are never wrapped: if a selector or predicate
/// panics, the panic propagates unchanged from the point the closure ran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The operator requires at least one element and the sequence is empty.
    #[error("sequence contains no elements")]
    NoElements,

    /// A predicate-qualified operator found no element satisfying the
    /// predicate in a non-empty sequence.
    #[error("no element satisfies the condition")]
    NoMatch,

    /// `single`-family operators found more than one qualifying element.
    #[error("sequence contains more than one qualifying element")]
    AmbiguousMatch,

    /// An index-based lookup fell outside the sequence bounds.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// The number of elements in the sequence.
        len: usize,
    },

    /// A generated range would exceed the integer representation.
    #[error("range of {count} values starting at {start} overflows i32")]
    RangeOverflow {
        /// The first value of the requested range.
        start: i32,
        /// The requested number of values.
        count: usize,
    },
}
