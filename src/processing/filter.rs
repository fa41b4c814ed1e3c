//! Predicate filtering.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Yields the upstream elements for which a predicate returns `true`, in order.
///
/// Created by [`SequenceExt::filter`](crate::sequence::SequenceExt::filter).
pub struct Filter<S, P> {
    upstream: S,
    predicate: Rc<P>,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Enumerator = FilterEnumerator<S::Enumerator, P>;

    fn enumerate(&self) -> Self::Enumerator {
        FilterEnumerator {
            upstream: self.upstream.enumerate(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

/// Enumerator for [`Filter`].
pub struct FilterEnumerator<I, P> {
    upstream: I,
    predicate: Rc<P>,
}

impl<I, P> Iterator for FilterEnumerator<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.upstream.next()?;
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
    }
}
