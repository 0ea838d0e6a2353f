use crate::sequence::{SeqIter, Sequence};
use std::marker::PhantomData;

/// Lazy projection stage produced by [`select`](crate::Query::select).
///
/// Discipline: buffering. The full projected output is computed when
/// iteration begins: the source is read exactly once per iterator request,
/// source order is preserved, and a panicking selector surfaces at the
/// `iterate()` call rather than at the first `next()`.
#[derive(Clone)]
pub struct Select<S, F, U> {
    source: S,
    selector: F,
    _out: PhantomData<U>,
}

impl<S, F, U> Select<S, F, U> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self {
            source,
            selector,
            _out: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for Select<S, F, U>
where
    S: Sequence,
    F: Fn(&S::Item) -> U,
    U: Clone,
{
    type Item = U;

    fn iterate(&self) -> SeqIter<'_, U> {
        let projected: Vec<U> = self
            .source
            .iterate()
            .map(|item| (self.selector)(&item))
            .collect();
        Box::new(projected.into_iter())
    }
}

/// Lazy flattening stage produced by
/// [`select_many`](crate::Query::select_many).
///
/// Yields the concatenation of the selected sub-sequences in source order.
///
/// Discipline: buffering, with the same contracts as [`Select`].
#[derive(Clone)]
pub struct SelectMany<S, F, U> {
    source: S,
    selector: F,
    _out: PhantomData<U>,
}

impl<S, F, U> SelectMany<S, F, U> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self {
            source,
            selector,
            _out: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for SelectMany<S, F, U>
where
    S: Sequence,
    F: Fn(&S::Item) -> Vec<U>,
    U: Clone,
{
    type Item = U;

    fn iterate(&self) -> SeqIter<'_, U> {
        let mut flattened: Vec<U> = Vec::new();
        for item in self.source.iterate() {
            flattened.extend((self.selector)(&item));
        }
        Box::new(flattened.into_iter())
    }
}
