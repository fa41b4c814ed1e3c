//! Short-circuiting truncation: [`Limit`] and [`LimitWhile`].
//!
//! Both operators stop requesting upstream elements the moment their output is complete, which
//! is what makes them safe to place after infinite sources.

use std::rc::Rc;

use crate::sequence::Sequence;

use super::clamp_count;

/// Yields at most `count` upstream elements.
///
/// Never pulls the element after the last one it yields.
///
/// Created by [`SequenceExt::limit`](crate::sequence::SequenceExt::limit).
pub struct Limit<S> {
    upstream: S,
    count: u64,
}

impl<S> Limit<S> {
    pub(crate) fn new(upstream: S, count: i64) -> Self {
        Self {
            upstream,
            count: clamp_count(count),
        }
    }
}

impl<S> Sequence for Limit<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Enumerator = LimitEnumerator<S::Enumerator>;

    fn enumerate(&self) -> Self::Enumerator {
        LimitEnumerator {
            upstream: self.upstream.enumerate(),
            remaining: self.count,
        }
    }
}

/// Enumerator for [`Limit`].
pub struct LimitEnumerator<I> {
    upstream: I,
    remaining: u64,
}

impl<I> Iterator for LimitEnumerator<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.next() {
            Some(value) => {
                self.remaining -= 1;
                Some(value)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}

/// Yields upstream elements while a predicate holds.
///
/// The first element failing the predicate is dropped and ends the enumeration; no further
/// upstream element is pulled.
///
/// Created by [`SequenceExt::limit_while`](crate::sequence::SequenceExt::limit_while).
pub struct LimitWhile<S, P> {
    upstream: S,
    predicate: Rc<P>,
}

impl<S, P> LimitWhile<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S, P> Sequence for LimitWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Enumerator = LimitWhileEnumerator<S::Enumerator, P>;

    fn enumerate(&self) -> Self::Enumerator {
        LimitWhileEnumerator {
            upstream: self.upstream.enumerate(),
            predicate: Rc::clone(&self.predicate),
            done: false,
        }
    }
}

/// Enumerator for [`LimitWhile`].
pub struct LimitWhileEnumerator<I, P> {
    upstream: I,
    predicate: Rc<P>,
    done: bool,
}

impl<I, P> Iterator for LimitWhileEnumerator<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next() {
            Some(value) if (self.predicate)(&value) => Some(value),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::sequence::{Sequence, SequenceExt};
    use crate::source::{iterate, of, of_iterator};

    #[test]
    fn limit_truncates() {
        assert_eq!(of(["a", "b", "c"]).limit(2).to_vec(), vec!["a", "b"]);
        assert_eq!(of(["a", "b", "c"]).limit(10).to_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn limit_zero_or_negative_yields_nothing_and_pulls_nothing() {
        let pulls = Rc::new(Cell::new(0));
        let pulls2 = Rc::clone(&pulls);
        let seq = iterate(0, |n| n + 1).peek(move |_| pulls2.set(pulls2.get() + 1));

        assert!((&seq).limit(0).to_vec().is_empty());
        assert!((&seq).limit(-3).to_vec().is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn limit_never_pulls_past_its_count() {
        let pulls = Rc::new(Cell::new(0));
        let pulls2 = Rc::clone(&pulls);
        let out = iterate(1, |n| n * 2)
            .peek(move |_| pulls2.set(pulls2.get() + 1))
            .limit(4)
            .to_vec();

        assert_eq!(out, vec![1, 2, 4, 8]);
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn limit_stops_pulling_once_upstream_ends() {
        // Yields 1, then None, then 2: a non-fused upstream.
        let mut script = vec![Some(2), None, Some(1)];
        let pulls = Rc::new(Cell::new(0));
        let pulls2 = Rc::clone(&pulls);
        let upstream = std::iter::from_fn(move || {
            pulls2.set(pulls2.get() + 1);
            script.pop().flatten()
        });
        let mut e = of_iterator(upstream).limit(5).enumerate();

        assert_eq!(e.next(), Some(1));
        assert_eq!(e.next(), None);
        assert_eq!(e.next(), None);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn limit_while_drops_failing_element_and_stops() {
        let pulls = Rc::new(Cell::new(0));
        let pulls2 = Rc::clone(&pulls);
        let out = iterate(1, |n| n + 1)
            .peek(move |_| pulls2.set(pulls2.get() + 1))
            .limit_while(|n| *n < 4)
            .to_vec();

        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn limit_while_does_not_resume_after_failure() {
        let out = of([1, 2, 9, 1, 2]).limit_while(|n| *n < 5).to_vec();
        assert_eq!(out, vec![1, 2]);
    }
}
