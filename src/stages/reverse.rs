use crate::sequence::{SeqIter, Sequence};

/// Lazy reversal stage produced by [`reverse`](crate::Query::reverse).
///
/// Discipline: buffering. The source is drained into a buffer when iteration
/// begins and replayed back-to-front.
#[derive(Clone)]
pub struct Reverse<S> {
    source: S,
}

impl<S> Reverse<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, S::Item> {
        let buffered: Vec<S::Item> = self.source.iterate().collect();
        Box::new(buffered.into_iter().rev())
    }
}
