//! The core sequence capability.
//!
//! A [`Sequence`] is anything that can hand out a fresh, independent iterator
//! over its elements on every request. This re-entrancy is the load-bearing
//! contract of the whole crate: a declared query can be enumerated twice and
//! must observe the same logical elements both times, and two in-flight
//! iterations of the same query must never share state (see the per-iteration
//! tracking set in [`Distinct`](crate::stages::Distinct)).
//!
//! Iterators are boxed so that adapter stages can mix live streaming and
//! internal buffering behind one signature.

/// A fresh iterator over a sequence, valid for as long as the sequence is
/// borrowed.
pub type SeqIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// A finite, multiply-enumerable source of elements.
///
/// `iterate` must return a new iterator each time it is called; the iterators
/// are independent of each other and each one observes every element of the
/// sequence in order. Elements are yielded by value (cloned out of the
/// underlying storage), so downstream stages own what they receive.
///
/// Every query operator is provided by the blanket
/// [`Query`](crate::query::Query) extension trait; implementing `Sequence`
/// is all a custom source needs to participate.
///
/// # Example
/// ```
/// use quarry::Sequence;
///
/// let nums = vec![1, 2, 3, 4];
/// // Two independent iterations over the same declared source.
/// assert_eq!(nums.iterate().count(), 4);
/// assert_eq!(nums.iterate().count(), 4);
/// ```
pub trait Sequence {
    /// The element type produced by iteration.
    type Item: Clone;

    /// Return a fresh iterator over the elements of this sequence.
    fn iterate(&self) -> SeqIter<'_, Self::Item>;
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn iterate(&self) -> SeqIter<'_, T> {
        Box::new(self.iter().cloned())
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn iterate(&self) -> SeqIter<'_, T> {
        Box::new(self.iter().cloned())
    }
}

// A borrowed sequence is itself a sequence, so a caller can feed `&source`
// into a consuming operator chain and keep the original alive.
impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn iterate(&self) -> SeqIter<'_, Self::Item> {
        (**self).iterate()
    }
}
