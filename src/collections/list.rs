use crate::sequence::{SeqIter, Sequence};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, growable container of query results.
///
/// `List` is the materialized-result type of the eager operators
/// ([`to_list`](crate::Query::to_list), [`order_by`](crate::Query::order_by),
/// the generators, and so on). It owns its elements outright, with no
/// aliasing of the source the results came from, and it implements
/// [`Sequence`], so results can be fed straight back into another query.
///
/// `List` deliberately does not deref to a slice: the slice methods `first`,
/// `last`, `concat`, and `reverse` would shadow the query operators of the
/// same names. Use [`as_slice`](List::as_slice) or indexing for positional
/// access.
///
/// # Example
/// ```
/// use quarry::{List, Query};
///
/// let evens: List<i32> = vec![1, 2, 3, 4].filter(|n| n % 2 == 0).to_list();
/// assert_eq!(evens.as_slice(), &[2, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append an element at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// The number of elements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrowing iterator over the elements, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the list and return the backing vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for List<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone> Sequence for List<T> {
    type Item = T;

    fn iterate(&self) -> SeqIter<'_, T> {
        Box::new(self.items.iter().cloned())
    }
}
