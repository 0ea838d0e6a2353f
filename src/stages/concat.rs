use crate::sequence::{SeqIter, Sequence};

/// Lazy concatenation stage produced by [`concat`](crate::Query::concat):
/// yields every element of the first sequence, then every element of the
/// second.
///
/// Discipline: live for both inputs.
#[derive(Clone)]
pub struct Concat<S1, S2> {
    first: S1,
    second: S2,
}

impl<S1, S2> Concat<S1, S2> {
    pub(crate) fn new(first: S1, second: S2) -> Self {
        Self { first, second }
    }
}

impl<S1, S2> Sequence for Concat<S1, S2>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
{
    type Item = S1::Item;

    fn iterate(&self) -> SeqIter<'_, S1::Item> {
        Box::new(self.first.iterate().chain(self.second.iterate()))
    }
}
