//! Buffered sorting.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::sequence::Sequence;

/// Yields the upstream elements ordered by a three-way comparator.
///
/// This is the one operator that is not element-lazy: the first pull of an enumeration drains
/// the entire upstream into a buffer, sorts it (stable), and then yields from the buffer.
/// Building the node and calling `enumerate()` still do no work.
///
/// An infinite upstream never finishes draining. Bound it first, e.g. with
/// [`SequenceExt::limit`](crate::sequence::SequenceExt::limit), or meter it through
/// [`crate::execution::ExecutionEngine::meter`].
///
/// Created by [`SequenceExt::sorted`](crate::sequence::SequenceExt::sorted) and
/// [`SequenceExt::sorted_by`](crate::sequence::SequenceExt::sorted_by).
pub struct Sorted<S, C> {
    upstream: S,
    cmp: Rc<C>,
}

impl<S, C> Sorted<S, C> {
    pub(crate) fn new(upstream: S, cmp: C) -> Self {
        Self {
            upstream,
            cmp: Rc::new(cmp),
        }
    }
}

impl<S, C> Sequence for Sorted<S, C>
where
    S: Sequence,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;
    type Enumerator = SortedEnumerator<S::Enumerator, C>;

    fn enumerate(&self) -> Self::Enumerator {
        SortedEnumerator {
            upstream: Some(self.upstream.enumerate()),
            cmp: Rc::clone(&self.cmp),
            buffer: Vec::new().into_iter(),
        }
    }
}

/// Enumerator for [`Sorted`].
pub struct SortedEnumerator<I, C>
where
    I: Iterator,
{
    upstream: Option<I>,
    cmp: Rc<C>,
    buffer: std::vec::IntoIter<I::Item>,
}

impl<I, C> Iterator for SortedEnumerator<I, C>
where
    I: Iterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = self.upstream.take() {
            let mut drained: Vec<I::Item> = upstream.collect();
            drained.sort_by(|a, b| (self.cmp)(a, b));
            self.buffer = drained.into_iter();
        }
        self.buffer.next()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::sequence::{Sequence, SequenceExt};
    use crate::source::{empty, of};

    #[test]
    fn sorted_by_descending_comparator() {
        let out = of(["a", "b", "c", "d", "e"])
            .sorted_by(|a, b| b.cmp(a))
            .to_vec();
        assert_eq!(out, vec!["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn sorted_natural_order() {
        assert_eq!(of([3, 1, 2]).sorted().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn sorted_empty_is_empty() {
        assert!(empty::<&str>().sorted().to_vec().is_empty());
    }

    #[test]
    fn sorted_is_stable() {
        let out = of([(1, "x"), (0, "y"), (1, "z"), (0, "w")])
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .to_vec();
        assert_eq!(out, vec![(0, "y"), (0, "w"), (1, "x"), (1, "z")]);
    }

    #[test]
    fn sorted_drains_on_first_pull_only() {
        let pulls = Rc::new(Cell::new(0));
        let pulls2 = Rc::clone(&pulls);
        let seq = of([2, 3, 1])
            .peek(move |_| pulls2.set(pulls2.get() + 1))
            .sorted();

        let mut e = seq.enumerate();
        assert_eq!(pulls.get(), 0);
        assert_eq!(e.next(), Some(1));
        assert_eq!(pulls.get(), 3);
        assert_eq!(e.next(), Some(2));
        assert_eq!(e.next(), Some(3));
        assert_eq!(e.next(), None);
        assert_eq!(pulls.get(), 3);
    }
}
