use std::fmt;
use std::rc::Rc;

use super::Sequence;

/// Object-safe view of a [`Sequence`], used by [`BoxedSequence`].
///
/// Implemented for every sequence whose enumerator outlives `'a`.
pub trait DynSequence<'a, T> {
    /// Start a fresh enumeration pass behind a boxed iterator.
    fn enumerate_boxed(&self) -> Box<dyn Iterator<Item = T> + 'a>;
}

impl<'a, S> DynSequence<'a, S::Item> for S
where
    S: Sequence + ?Sized,
    S::Enumerator: 'a,
{
    fn enumerate_boxed(&self) -> Box<dyn Iterator<Item = S::Item> + 'a> {
        Box::new(self.enumerate())
    }
}

/// A type-erased sequence.
///
/// Lets pipelines of different shapes share one type, e.g. to [`crate::source::concat`] them or
/// to return different node chains from the branches of a function. Cloning is cheap and shares
/// the underlying node.
pub struct BoxedSequence<'a, T> {
    inner: Rc<dyn DynSequence<'a, T> + 'a>,
}

impl<'a, T> BoxedSequence<'a, T> {
    /// Erase the concrete type of `sequence`.
    pub fn new<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + 'a,
        S::Enumerator: 'a,
    {
        Self {
            inner: Rc::new(sequence),
        }
    }
}

impl<T> Clone for BoxedSequence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for BoxedSequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedSequence").finish_non_exhaustive()
    }
}

impl<'a, T> Sequence for BoxedSequence<'a, T> {
    type Item = T;
    type Enumerator = Box<dyn Iterator<Item = T> + 'a>;

    fn enumerate(&self) -> Self::Enumerator {
        self.inner.enumerate_boxed()
    }
}
