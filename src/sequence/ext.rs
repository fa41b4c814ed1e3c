use std::cmp::Ordering;

use crate::processing::{
    Distinct, Filter, FlatMap, Limit, LimitWhile, Map, Peek, Skip, SkipWhile, Sorted, find, matching,
    reduce,
};
use crate::source::Chain;

use super::{BoxedSequence, Sequence};

/// Chaining API available on every [`Sequence`].
///
/// Intermediate operators consume `self` and return a new node without touching any data.
/// Terminal operators borrow `self`, drive exactly one enumeration pass, and may be called again
/// (whether a second pass sees the same data depends on the leaf source).
///
/// Functions handed to intermediate operators are `Fn`, because a node may be enumerated many
/// times. Functions handed to terminal operators are `FnMut` and run during a single pass.
pub trait SequenceExt: Sequence {
    /// Keep elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transform every element with `mapper`, one to one.
    fn map<U, F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, mapper)
    }

    /// Replace every element with all elements of the sequence `mapper` returns for it.
    fn flat_map<U, F>(self, mapper: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        U: Sequence,
        F: Fn(Self::Item) -> U,
    {
        FlatMap::new(self, mapper)
    }

    /// Drop the first `count` elements. Zero or negative counts are a no-op.
    fn skip(self, count: i64) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Drop the leading elements for which `predicate` holds.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yield at most `count` elements. Zero or negative counts yield nothing.
    fn limit(self, count: i64) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit::new(self, count)
    }

    /// Yield elements until `predicate` first fails.
    fn limit_while<P>(self, predicate: P) -> LimitWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        LimitWhile::new(self, predicate)
    }

    /// Yield each element only the first time an equal (`PartialEq`) element is seen.
    #[allow(clippy::type_complexity)]
    fn distinct(self) -> Distinct<Self, fn(&Self::Item, &Self::Item) -> bool>
    where
        Self: Sized,
        Self::Item: PartialEq + Clone,
    {
        let eq: fn(&Self::Item, &Self::Item) -> bool = <Self::Item as PartialEq>::eq;
        Distinct::new(self, eq)
    }

    /// Yield each element unless `eq(candidate, accepted)` holds for an already yielded element.
    fn distinct_by<E>(self, eq: E) -> Distinct<Self, E>
    where
        Self: Sized,
        Self::Item: Clone,
        E: Fn(&Self::Item, &Self::Item) -> bool,
    {
        Distinct::new(self, eq)
    }

    /// Sort by the natural (`Ord`) order. Buffers the whole upstream on first pull.
    #[allow(clippy::type_complexity)]
    fn sorted(self) -> Sorted<Self, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        let cmp: fn(&Self::Item, &Self::Item) -> Ordering = <Self::Item as Ord>::cmp;
        Sorted::new(self, cmp)
    }

    /// Sort with a three-way comparator. Buffers the whole upstream on first pull.
    fn sorted_by<C>(self, cmp: C) -> Sorted<Self, C>
    where
        Self: Sized,
        C: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        Sorted::new(self, cmp)
    }

    /// Invoke `action` on every element as it passes through, leaving it unchanged.
    fn peek<A>(self, action: A) -> Peek<Self, A>
    where
        Self: Sized,
        A: Fn(&Self::Item),
    {
        Peek::new(self, action)
    }

    /// Yield all elements of `self`, then all elements of `other`.
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Erase the concrete node type.
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
        Self::Enumerator: 'a,
    {
        BoxedSequence::new(self)
    }

    /// Invoke `action` once per element, in order.
    fn for_each<A>(&self, action: A)
    where
        A: FnMut(Self::Item),
    {
        reduce::for_each(self, action)
    }

    /// Collect all elements, in order.
    fn to_vec(&self) -> Vec<Self::Item> {
        reduce::to_vec(self)
    }

    /// Left fold starting from `identity`.
    fn reduce<A, F>(&self, identity: A, accumulator: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        reduce::reduce(self, identity, accumulator)
    }

    /// Number of elements after one full pass.
    fn count(&self) -> usize {
        reduce::count(self)
    }

    /// `true` unless some element fails `predicate`.
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        matching::all_match(self, predicate)
    }

    /// `true` as soon as some element satisfies `predicate`.
    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        matching::any_match(self, predicate)
    }

    /// `true` unless some element satisfies `predicate`.
    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        matching::none_match(self, predicate)
    }

    /// The first element, pulling at most one.
    fn find_first(&self) -> Option<Self::Item> {
        find::find_first(self)
    }

    /// The first element, or `default` when the sequence is empty.
    fn find_first_or(&self, default: Self::Item) -> Self::Item {
        find::find_first(self).unwrap_or(default)
    }

    /// The last element, after a full pass.
    fn find_last(&self) -> Option<Self::Item> {
        find::find_last(self)
    }

    /// The last element, or `default` when the sequence is empty.
    fn find_last_or(&self, default: Self::Item) -> Self::Item {
        find::find_last(self).unwrap_or(default)
    }

    /// The greatest element according to `cmp`; ties keep the earliest.
    fn max_by<C>(&self, cmp: C) -> Option<Self::Item>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        find::max_by(self, cmp)
    }

    /// The greatest element according to `cmp`, or `default` when the sequence is empty.
    fn max_by_or<C>(&self, cmp: C, default: Self::Item) -> Self::Item
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        find::max_by(self, cmp).unwrap_or(default)
    }

    /// The least element according to `cmp`; ties keep the earliest.
    fn min_by<C>(&self, cmp: C) -> Option<Self::Item>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        find::min_by(self, cmp)
    }

    /// The least element according to `cmp`, or `default` when the sequence is empty.
    fn min_by_or<C>(&self, cmp: C, default: Self::Item) -> Self::Item
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        find::min_by(self, cmp).unwrap_or(default)
    }
}

impl<S> SequenceExt for S where S: Sequence + ?Sized {}
