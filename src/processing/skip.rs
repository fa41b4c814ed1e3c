//! Prefix dropping: [`Skip`] and [`SkipWhile`].

use std::rc::Rc;

use crate::sequence::Sequence;

use super::clamp_count;

/// Drops the first `count` upstream elements and yields the rest.
///
/// The prefix is dropped lazily, on the first pull of each enumeration.
///
/// Created by [`SequenceExt::skip`](crate::sequence::SequenceExt::skip).
pub struct Skip<S> {
    upstream: S,
    count: u64,
}

impl<S> Skip<S> {
    pub(crate) fn new(upstream: S, count: i64) -> Self {
        Self {
            upstream,
            count: clamp_count(count),
        }
    }
}

impl<S> Sequence for Skip<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Enumerator = SkipEnumerator<S::Enumerator>;

    fn enumerate(&self) -> Self::Enumerator {
        SkipEnumerator {
            upstream: self.upstream.enumerate(),
            remaining: self.count,
        }
    }
}

/// Enumerator for [`Skip`].
pub struct SkipEnumerator<I> {
    upstream: I,
    remaining: u64,
}

impl<I> Iterator for SkipEnumerator<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.upstream.next()?;
        }
        self.upstream.next()
    }
}

/// Drops the leading run of elements for which a predicate holds.
///
/// Once the predicate first returns `false`, that element and everything after it is yielded
/// and the predicate is not consulted again for the rest of the enumeration.
///
/// Created by [`SequenceExt::skip_while`](crate::sequence::SequenceExt::skip_while).
pub struct SkipWhile<S, P> {
    upstream: S,
    predicate: Rc<P>,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Enumerator = SkipWhileEnumerator<S::Enumerator, P>;

    fn enumerate(&self) -> Self::Enumerator {
        SkipWhileEnumerator {
            upstream: self.upstream.enumerate(),
            predicate: Rc::clone(&self.predicate),
            skipping: true,
        }
    }
}

/// Enumerator for [`SkipWhile`].
pub struct SkipWhileEnumerator<I, P> {
    upstream: I,
    predicate: Rc<P>,
    skipping: bool,
}

impl<I, P> Iterator for SkipWhileEnumerator<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.skipping {
            return self.upstream.next();
        }
        loop {
            let value = self.upstream.next()?;
            if !(self.predicate)(&value) {
                self.skipping = false;
                return Some(value);
            }
        }
    }
}
