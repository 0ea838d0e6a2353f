use crate::collections::OrderedSet;
use crate::sequence::{SeqIter, Sequence};
use std::hash::Hash;

/// Lazy deduplication stage produced by [`distinct`](crate::Query::distinct).
///
/// Yields each value once, in order of first occurrence. The tracking set is
/// created fresh inside every iterator this stage hands out and is owned by
/// that iterator alone, so re-iterating a `distinct()` query never remembers
/// a prior iteration and two concurrent iterations cannot contaminate each
/// other.
///
/// Discipline: live; the tracking set fills as elements are pulled.
#[derive(Clone)]
pub struct Distinct<S> {
    source: S,
}

impl<S> Distinct<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash,
{
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, S::Item> {
        let mut seen = OrderedSet::new();
        Box::new(
            self.source
                .iterate()
                .filter(move |item| seen.insert(item.clone())),
        )
    }
}
