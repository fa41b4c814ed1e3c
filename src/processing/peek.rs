//! Side-effecting tap.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Calls an action with every upstream element before yielding it unchanged.
///
/// Created by [`SequenceExt::peek`](crate::sequence::SequenceExt::peek).
pub struct Peek<S, A> {
    upstream: S,
    action: Rc<A>,
}

impl<S, A> Peek<S, A> {
    pub(crate) fn new(upstream: S, action: A) -> Self {
        Self {
            upstream,
            action: Rc::new(action),
        }
    }
}

impl<S, A> Sequence for Peek<S, A>
where
    S: Sequence,
    A: Fn(&S::Item),
{
    type Item = S::Item;
    type Enumerator = PeekEnumerator<S::Enumerator, A>;

    fn enumerate(&self) -> Self::Enumerator {
        PeekEnumerator {
            upstream: self.upstream.enumerate(),
            action: Rc::clone(&self.action),
        }
    }
}

/// Enumerator for [`Peek`].
pub struct PeekEnumerator<I, A> {
    upstream: I,
    action: Rc<A>,
}

impl<I, A> Iterator for PeekEnumerator<I, A>
where
    I: Iterator,
    A: Fn(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.upstream.next()?;
        (self.action)(&value);
        Some(value)
    }
}
