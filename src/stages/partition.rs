use crate::sequence::{SeqIter, Sequence};

/// Lazy stage produced by [`skip`](crate::Query::skip): discards the first
/// `count` elements (fewer if the source is shorter) and yields the rest in
/// order.
///
/// Discipline: live.
#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, S::Item> {
        Box::new(self.source.iterate().skip(self.count))
    }
}

/// Lazy stage produced by [`take`](crate::Query::take): yields at most the
/// first `count` elements.
///
/// Discipline: live.
#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, S::Item> {
        Box::new(self.source.iterate().take(self.count))
    }
}

/// Lazy stage produced by [`skip_while`](crate::Query::skip_while): discards
/// elements while the predicate holds. The first element for which it is
/// false is part of the remainder, and once false the predicate is never
/// reapplied; everything after that element is yielded unconditionally.
///
/// Discipline: live.
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, S::Item> {
        let predicate = &self.predicate;
        Box::new(self.source.iterate().skip_while(move |item| predicate(item)))
    }
}

/// Lazy stage produced by [`take_while`](crate::Query::take_while): yields
/// elements until the first one that fails the predicate. The failing
/// element is not yielded, and nothing after it is yielded even if the
/// predicate would hold again later.
///
/// Discipline: live.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, S::Item> {
        let predicate = &self.predicate;
        Box::new(self.source.iterate().take_while(move |item| predicate(item)))
    }
}
