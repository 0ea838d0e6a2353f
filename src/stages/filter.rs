use crate::sequence::{SeqIter, Sequence};
use std::marker::PhantomData;

/// Lazy filtering stage produced by [`filter`](crate::Query::filter).
///
/// Discipline: live. The predicate runs once per source element, on demand,
/// and is re-evaluated independently on each iteration request.
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, S::Item> {
        let predicate = &self.predicate;
        Box::new(self.source.iterate().filter(move |item| predicate(item)))
    }
}

/// Lazy variant-projection stage produced by [`of_type`](crate::Query::of_type).
///
/// The discriminator maps each element to `Some(converted)` when it belongs
/// to the requested shape and `None` otherwise; only converted elements are
/// yielded. This is the statically-typed rendering of filter-by-runtime-type:
/// discrimination and conversion are one explicit function instead of a
/// reflective cast.
///
/// Discipline: live.
#[derive(Clone)]
pub struct OfType<S, F, U> {
    source: S,
    discriminate: F,
    _out: PhantomData<U>,
}

impl<S, F, U> OfType<S, F, U> {
    pub(crate) fn new(source: S, discriminate: F) -> Self {
        Self {
            source,
            discriminate,
            _out: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for OfType<S, F, U>
where
    S: Sequence,
    F: Fn(&S::Item) -> Option<U>,
    U: Clone,
{
    type Item = U;

    fn iterate(&self) -> SeqIter<'_, U> {
        let discriminate = &self.discriminate;
        Box::new(
            self.source
                .iterate()
                .filter_map(move |item| discriminate(&item)),
        )
    }
}
