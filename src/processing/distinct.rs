//! De-duplication against the elements already yielded in the current pass.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Yields each upstream element unless it is equal to one already yielded in this enumeration.
///
/// The accepted elements are kept in a plain list and every candidate is compared against each
/// of them with `eq(candidate, accepted)`, so a pass costs O(n²) comparisons in the worst case.
/// `eq` is applied exactly in that argument order and is not assumed to be symmetric or
/// transitive. The list is discarded at the end of the enumeration.
///
/// Created by [`SequenceExt::distinct`](crate::sequence::SequenceExt::distinct) and
/// [`SequenceExt::distinct_by`](crate::sequence::SequenceExt::distinct_by).
pub struct Distinct<S, E> {
    upstream: S,
    eq: Rc<E>,
}

impl<S, E> Distinct<S, E> {
    pub(crate) fn new(upstream: S, eq: E) -> Self {
        Self {
            upstream,
            eq: Rc::new(eq),
        }
    }
}

impl<S, E> Sequence for Distinct<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: Fn(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;
    type Enumerator = DistinctEnumerator<S::Enumerator, E>;

    fn enumerate(&self) -> Self::Enumerator {
        DistinctEnumerator {
            upstream: self.upstream.enumerate(),
            eq: Rc::clone(&self.eq),
            accepted: Vec::new(),
        }
    }
}

/// Enumerator for [`Distinct`].
pub struct DistinctEnumerator<I, E>
where
    I: Iterator,
{
    upstream: I,
    eq: Rc<E>,
    accepted: Vec<I::Item>,
}

impl<I, E> Iterator for DistinctEnumerator<I, E>
where
    I: Iterator,
    I::Item: Clone,
    E: Fn(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.upstream.next()?;
            let seen = self
                .accepted
                .iter()
                .any(|accepted| (self.eq)(&candidate, accepted));
            if !seen {
                self.accepted.push(candidate.clone());
                return Some(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::sequence::SequenceExt;
    use crate::source::{empty, of};

    #[test]
    fn distinct_uses_equality() {
        let out = of(["a", "b", "a", "c"]).distinct().to_vec();
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn distinct_by_always_equal_keeps_first_only() {
        let out = of(["a", "b", "a", "c"]).distinct_by(|_, _| true).to_vec();
        assert_eq!(out, vec!["a"]);
    }

    #[test]
    fn distinct_by_custom_key() {
        let out = of(["Apple", "avocado", "Banana", "blueberry", "cherry"])
            .distinct_by(|a: &&str, b: &&str| a[..1].eq_ignore_ascii_case(&b[..1]))
            .to_vec();
        assert_eq!(out, vec!["Apple", "Banana", "cherry"]);
    }

    #[test]
    fn distinct_by_passes_candidate_first() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let calls2 = Rc::clone(&calls);
        let _ = of([1, 2, 3])
            .distinct_by(move |candidate, accepted| {
                calls2.borrow_mut().push((*candidate, *accepted));
                false
            })
            .to_vec();

        assert_eq!(*calls.borrow(), vec![(2, 1), (3, 1), (3, 2)]);
    }

    #[test]
    fn distinct_state_resets_per_enumeration() {
        let seq = of([1, 1, 2]).distinct();
        assert_eq!(seq.to_vec(), vec![1, 2]);
        assert_eq!(seq.to_vec(), vec![1, 2]);
        assert!(empty::<i32>().distinct().to_vec().is_empty());
    }
}
