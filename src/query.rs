//! The fluent operator surface.
//!
//! [`Query`] is blanket-implemented for every [`Sequence`], so any source
//! (a `Vec`, a [`List`], an [`OrderedSet`], or another stage) carries the
//! whole operator set. Operators come in two kinds:
//!
//! - **lazy** operators consume `self` and return a new stage that performs
//!   no work until iterated (see [`stages`](crate::stages) for each stage's
//!   enumeration discipline);
//! - **eager** operators borrow the sequence, enumerate it to completion on
//!   the calling thread, and return a scalar or a materialized container.
//!
//! Borrowed sequences are sequences too, so a chain can be started from
//! `&source` when the caller wants to keep the original:
//!
//! ```
//! use quarry::Query;
//!
//! let data = vec![3, 1, 4, 1, 5];
//! let firsts = (&data).take(2).to_list();
//! assert_eq!(firsts, vec![3, 1]);
//! assert_eq!(data.count(), 5); // still usable
//! ```

use crate::collections::{List, OrderedSet};
use crate::error::QueryError;
use crate::numeric::Numeric;
use crate::sequence::Sequence;
use crate::stages::{
    Concat, Distinct, Filter, OfType, Reverse, Select, SelectMany, Skip, SkipWhile, Take,
    TakeWhile,
};
use std::collections::HashMap;
use std::hash::Hash;

/// Query operators over any [`Sequence`].
///
/// See the [module docs](self) for the lazy/eager split. All eager operators
/// run synchronously and never retry; panics from caller-supplied closures
/// propagate unchanged from the point the closure ran.
pub trait Query: Sequence + Sized {
    // ---- lazy pipeline stages ----

    /// Keep only the elements for which `predicate` holds.
    ///
    /// # Example
    /// ```
    /// use quarry::Query;
    ///
    /// let big = vec![1, 2, 3, 4].filter(|n| *n > 1).to_list();
    /// assert_eq!(big, vec![2, 3, 4]);
    /// ```
    #[must_use]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Project each element into a new form, preserving order.
    ///
    /// # Example
    /// ```
    /// use quarry::Query;
    ///
    /// let doubled = vec![1, 2, 3].select(|n| n * 2).to_list();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[must_use]
    fn select<U, F>(self, selector: F) -> Select<Self, F, U>
    where
        U: Clone,
        F: Fn(&Self::Item) -> U,
    {
        Select::new(self, selector)
    }

    /// Map each element to a sub-sequence and flatten the results into one
    /// sequence, in source order.
    #[must_use]
    fn select_many<U, F>(self, selector: F) -> SelectMany<Self, F, U>
    where
        U: Clone,
        F: Fn(&Self::Item) -> Vec<U>,
    {
        SelectMany::new(self, selector)
    }

    /// Keep the elements the discriminator recognizes, converted to their
    /// target shape.
    ///
    /// This replaces filter-by-runtime-type: `discriminate` returns
    /// `Some(converted)` for elements of the wanted variant and `None` for
    /// the rest.
    ///
    /// # Example
    /// ```
    /// use quarry::Query;
    ///
    /// #[derive(Clone)]
    /// enum Value { Int(i32), Text(String) }
    ///
    /// let mixed = vec![Value::Int(1), Value::Text("x".into()), Value::Int(2)];
    /// let ints = mixed
    ///     .of_type(|v| match v { Value::Int(n) => Some(*n), _ => None })
    ///     .to_list();
    /// assert_eq!(ints, vec![1, 2]);
    /// ```
    #[must_use]
    fn of_type<U, F>(self, discriminate: F) -> OfType<Self, F, U>
    where
        U: Clone,
        F: Fn(&Self::Item) -> Option<U>,
    {
        OfType::new(self, discriminate)
    }

    /// Convert every element with an explicit, total conversion function.
    ///
    /// Fails with [`QueryError::NoElements`] on an empty source; the
    /// emptiness check runs at the call, the conversions run lazily.
    fn cast<U, F>(self, convert: F) -> Result<Select<Self, F, U>, QueryError>
    where
        U: Clone,
        F: Fn(&Self::Item) -> U,
    {
        if self.iterate().next().is_none() {
            return Err(QueryError::NoElements);
        }
        Ok(Select::new(self, convert))
    }

    /// Discard the first `count` elements (fewer if the source is shorter).
    #[must_use]
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// Discard elements while `predicate` holds; the first failing element
    /// starts the remainder, which is yielded unconditionally.
    #[must_use]
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yield at most the first `count` elements.
    #[must_use]
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    /// Yield elements until the first one that fails `predicate`; the
    /// failing element and everything after it are dropped.
    #[must_use]
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Yield each value once, in order of first occurrence.
    ///
    /// Each iteration request starts from a fresh tracking set; see
    /// [`Distinct`].
    ///
    /// # Example
    /// ```
    /// use quarry::Query;
    ///
    /// let unique = vec![1, 2, 2, 3, 1].distinct().to_list();
    /// assert_eq!(unique, vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Eq + Hash,
    {
        Distinct::new(self)
    }

    /// Append `second` after this sequence.
    #[must_use]
    fn concat<S2>(self, second: S2) -> Concat<Self, S2>
    where
        S2: Sequence<Item = Self::Item>,
    {
        Concat::new(self, second)
    }

    /// Invert the order of the elements.
    #[must_use]
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    // ---- materialization ----

    /// Materialize the sequence into an owned [`List`], in iteration order.
    #[must_use]
    fn to_list(&self) -> List<Self::Item> {
        self.iterate().collect()
    }

    /// The elements of this sequence, or a single default value if it is
    /// empty.
    #[must_use]
    fn default_if_empty(self) -> List<Self::Item>
    where
        Self::Item: Default,
    {
        self.default_if_empty_with(Self::Item::default())
    }

    /// The elements of this sequence, or a single copy of `value` if it is
    /// empty.
    #[must_use]
    fn default_if_empty_with(self, value: Self::Item) -> List<Self::Item> {
        let materialized = self.to_list();
        if materialized.is_empty() {
            List::from(vec![value])
        } else {
            materialized
        }
    }

    // ---- counting and containment ----

    /// The number of elements. Always a full O(n) enumeration.
    #[must_use]
    fn count(&self) -> usize {
        self.iterate().count()
    }

    /// The number of elements satisfying `predicate`.
    #[must_use]
    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iterate().filter(|item| predicate(item)).count()
    }

    /// [`count`](Query::count) as a `u64`.
    #[must_use]
    fn long_count(&self) -> u64 {
        self.iterate().count() as u64
    }

    /// [`count_where`](Query::count_where) as a `u64`.
    #[must_use]
    fn long_count_where<P>(&self, predicate: P) -> u64
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.count_where(predicate) as u64
    }

    /// Whether the sequence contains any elements.
    #[must_use]
    fn any(&self) -> bool {
        self.iterate().next().is_some()
    }

    /// Whether any element satisfies `predicate`.
    #[must_use]
    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iterate().any(|item| predicate(&item))
    }

    /// Whether every element satisfies `predicate`. Vacuously true on an
    /// empty sequence.
    #[must_use]
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        !self.any_where(|item| !predicate(item))
    }

    /// Whether both sequences have the same length and pairwise-equal
    /// elements in iteration order. Never fails on a length mismatch.
    #[must_use]
    fn sequence_equal<S2>(&self, second: &S2) -> bool
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        let mut left = self.iterate();
        let mut right = second.iterate();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) if a == b => {}
                (None, None) => return true,
                _ => return false,
            }
        }
    }

    // ---- folds and numeric aggregates ----

    /// Fold the sequence left-to-right with `combiner`, seeded by the first
    /// element.
    ///
    /// Fails with [`QueryError::NoElements`] on an empty sequence.
    ///
    /// # Example
    /// ```
    /// use quarry::Query;
    ///
    /// let product = vec![1, 2, 3, 4].aggregate(|acc, n| acc * n).unwrap();
    /// assert_eq!(product, 24);
    /// ```
    fn aggregate<F>(&self, combiner: F) -> Result<Self::Item, QueryError>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        let mut iter = self.iterate();
        let mut acc = iter.next().ok_or(QueryError::NoElements)?;
        for item in iter {
            acc = combiner(acc, item);
        }
        Ok(acc)
    }

    /// Sum `selector(element)` over the sequence in the representation's
    /// widened accumulator. Returns the representation's zero for an empty
    /// sequence.
    #[must_use]
    fn sum_by<N, F>(&self, selector: F) -> N::Sum
    where
        N: Numeric,
        F: Fn(&Self::Item) -> N,
    {
        let mut sum = N::zero();
        for item in self.iterate() {
            sum = N::accumulate(sum, selector(&item));
        }
        sum
    }

    /// The average of `selector(element)` over the sequence.
    ///
    /// Fails with [`QueryError::NoElements`] on an empty sequence; the
    /// division is undefined, not clamped.
    fn average_by<N, F>(&self, selector: F) -> Result<N::Average, QueryError>
    where
        N: Numeric,
        F: Fn(&Self::Item) -> N,
    {
        let mut sum = N::zero();
        let mut count = 0u64;
        for item in self.iterate() {
            sum = N::accumulate(sum, selector(&item));
            count += 1;
        }
        if count == 0 {
            return Err(QueryError::NoElements);
        }
        Ok(N::divide(sum, count))
    }

    /// The element whose extracted key is smallest. Ties keep the first
    /// element encountered.
    ///
    /// Fails with [`QueryError::NoElements`] on an empty sequence.
    fn min_by_key<K, F>(&self, selector: F) -> Result<Self::Item, QueryError>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        let mut iter = self.iterate();
        let mut best = iter.next().ok_or(QueryError::NoElements)?;
        let mut best_key = selector(&best);
        for item in iter {
            let key = selector(&item);
            if key < best_key {
                best = item;
                best_key = key;
            }
        }
        Ok(best)
    }

    /// The element whose extracted key is largest. Ties keep the first
    /// element encountered.
    ///
    /// Fails with [`QueryError::NoElements`] on an empty sequence.
    fn max_by_key<K, F>(&self, selector: F) -> Result<Self::Item, QueryError>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        let mut iter = self.iterate();
        let mut best = iter.next().ok_or(QueryError::NoElements)?;
        let mut best_key = selector(&best);
        for item in iter {
            let key = selector(&item);
            if key > best_key {
                best = item;
                best_key = key;
            }
        }
        Ok(best)
    }

    // ---- element retrieval ----

    /// The first element, or [`QueryError::NoElements`].
    fn first(&self) -> Result<Self::Item, QueryError> {
        self.iterate().next().ok_or(QueryError::NoElements)
    }

    /// The first element satisfying `predicate`.
    ///
    /// Fails with [`QueryError::NoElements`] on an empty sequence and
    /// [`QueryError::NoMatch`] when no element qualifies.
    fn first_where<P>(&self, predicate: P) -> Result<Self::Item, QueryError>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut empty = true;
        for item in self.iterate() {
            empty = false;
            if predicate(&item) {
                return Ok(item);
            }
        }
        Err(if empty {
            QueryError::NoElements
        } else {
            QueryError::NoMatch
        })
    }

    /// The first element, or `None` if the sequence is empty.
    #[must_use]
    fn first_or_default(&self) -> Option<Self::Item> {
        self.iterate().next()
    }

    /// The first element satisfying `predicate`, or `None`.
    #[must_use]
    fn first_or_default_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iterate().find(|item| predicate(item))
    }

    /// The last element, or [`QueryError::NoElements`].
    fn last(&self) -> Result<Self::Item, QueryError> {
        self.iterate().last().ok_or(QueryError::NoElements)
    }

    /// The last element satisfying `predicate`; same failure split as
    /// [`first_where`](Query::first_where).
    fn last_where<P>(&self, predicate: P) -> Result<Self::Item, QueryError>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut empty = true;
        let mut found = None;
        for item in self.iterate() {
            empty = false;
            if predicate(&item) {
                found = Some(item);
            }
        }
        found.ok_or(if empty {
            QueryError::NoElements
        } else {
            QueryError::NoMatch
        })
    }

    /// The last element, or `None` if the sequence is empty.
    #[must_use]
    fn last_or_default(&self) -> Option<Self::Item> {
        self.iterate().last()
    }

    /// The last element satisfying `predicate`, or `None`.
    #[must_use]
    fn last_or_default_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iterate().filter(|item| predicate(item)).last()
    }

    /// The only element of the sequence.
    ///
    /// Fails with [`QueryError::NoElements`] when empty and
    /// [`QueryError::AmbiguousMatch`] when a second element exists.
    ///
    /// # Example
    /// ```
    /// use quarry::{Query, QueryError};
    ///
    /// assert_eq!(vec![5].single().unwrap(), 5);
    /// assert_eq!(vec![5, 6].single(), Err(QueryError::AmbiguousMatch));
    /// ```
    fn single(&self) -> Result<Self::Item, QueryError> {
        let mut iter = self.iterate();
        let only = iter.next().ok_or(QueryError::NoElements)?;
        if iter.next().is_some() {
            return Err(QueryError::AmbiguousMatch);
        }
        Ok(only)
    }

    /// The only element satisfying `predicate`.
    ///
    /// Fails with [`QueryError::NoElements`] on an empty sequence,
    /// [`QueryError::NoMatch`] when nothing qualifies, and
    /// [`QueryError::AmbiguousMatch`] when more than one element does.
    fn single_where<P>(&self, predicate: P) -> Result<Self::Item, QueryError>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut empty = true;
        let mut found = None;
        for item in self.iterate() {
            empty = false;
            if predicate(&item) {
                if found.is_some() {
                    return Err(QueryError::AmbiguousMatch);
                }
                found = Some(item);
            }
        }
        found.ok_or(if empty {
            QueryError::NoElements
        } else {
            QueryError::NoMatch
        })
    }

    /// The only element, or `Ok(None)` if the sequence is empty.
    ///
    /// Ambiguity always fails: a second element is
    /// [`QueryError::AmbiguousMatch`], never `None`. The predicate-qualified
    /// form applies the same policy.
    fn single_or_default(&self) -> Result<Option<Self::Item>, QueryError> {
        let mut iter = self.iterate();
        let Some(only) = iter.next() else {
            return Ok(None);
        };
        if iter.next().is_some() {
            return Err(QueryError::AmbiguousMatch);
        }
        Ok(Some(only))
    }

    /// The only element satisfying `predicate`, or `Ok(None)` when no
    /// element qualifies. More than one qualifying element is
    /// [`QueryError::AmbiguousMatch`], matching
    /// [`single_or_default`](Query::single_or_default).
    fn single_or_default_where<P>(&self, predicate: P) -> Result<Option<Self::Item>, QueryError>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut found = None;
        for item in self.iterate() {
            if predicate(&item) {
                if found.is_some() {
                    return Err(QueryError::AmbiguousMatch);
                }
                found = Some(item);
            }
        }
        Ok(found)
    }

    /// The element at the zero-based `index`, or
    /// [`QueryError::IndexOutOfRange`].
    fn element_at(&self, index: usize) -> Result<Self::Item, QueryError> {
        let mut len = 0;
        for item in self.iterate() {
            if len == index {
                return Ok(item);
            }
            len += 1;
        }
        Err(QueryError::IndexOutOfRange { index, len })
    }

    /// The element at the zero-based `index`, or `None` when out of range.
    #[must_use]
    fn element_at_or_default(&self, index: usize) -> Option<Self::Item> {
        self.iterate().nth(index)
    }

    // ---- set combination ----

    /// The distinct values appearing in either sequence, in order of first
    /// occurrence across this sequence followed by `second`.
    #[must_use]
    fn union<S2>(&self, second: &S2) -> OrderedSet<Self::Item>
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        let mut combined = OrderedSet::new();
        for item in self.iterate() {
            combined.insert(item);
        }
        for item in second.iterate() {
            combined.insert(item);
        }
        combined
    }

    /// The distinct source values that also occur in `second`, in source
    /// first-occurrence order.
    #[must_use]
    fn intersect<S2>(&self, second: &S2) -> OrderedSet<Self::Item>
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        let members: OrderedSet<Self::Item> = second.iterate().collect();
        let mut common = OrderedSet::new();
        for item in self.iterate() {
            if members.contains(&item) {
                common.insert(item);
            }
        }
        common
    }

    /// The source elements that do not occur in `second`, preserving source
    /// order and multiplicity. Unlike [`union`](Query::union) and
    /// [`intersect`](Query::intersect), this does not deduplicate the kept
    /// elements.
    #[must_use]
    fn except<S2>(&self, second: &S2) -> List<Self::Item>
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        let members: OrderedSet<Self::Item> = second.iterate().collect();
        self.iterate().filter(|item| !members.contains(item)).collect()
    }

    // ---- ordering and grouping ----

    /// Sort ascending by extracted key into a new [`List`].
    ///
    /// The sort is stable: elements with equal keys retain their relative
    /// source order. The returned list is multiply-iterable without
    /// re-sorting.
    #[must_use]
    fn order_by<K, F>(&self, key_selector: F) -> List<Self::Item>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        let mut items: Vec<Self::Item> = self.iterate().collect();
        items.sort_by(|a, b| key_selector(a).cmp(&key_selector(b)));
        List::from(items)
    }

    /// Sort descending by extracted key; stable like
    /// [`order_by`](Query::order_by).
    #[must_use]
    fn order_by_descending<K, F>(&self, key_selector: F) -> List<Self::Item>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        let mut items: Vec<Self::Item> = self.iterate().collect();
        items.sort_by(|a, b| key_selector(b).cmp(&key_selector(a)));
        List::from(items)
    }

    /// Partition the sequence into a mapping from extracted key to the
    /// group's members, preserving source order within each group.
    ///
    /// Built in a single pass over the source.
    #[must_use]
    fn group_by<K, F>(&self, key_selector: F) -> HashMap<K, List<Self::Item>>
    where
        K: Eq + Hash,
        F: Fn(&Self::Item) -> K,
    {
        let mut groups: HashMap<K, List<Self::Item>> = HashMap::new();
        for item in self.iterate() {
            groups.entry(key_selector(&item)).or_default().push(item);
        }
        groups
    }
}

impl<S: Sequence> Query for S {}
