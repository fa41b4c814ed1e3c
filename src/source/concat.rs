//! Sequence concatenation.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Yields every element of each part, part by part. Built by [`super::concat`].
///
/// A part is only enumerated once the previous one is exhausted.
pub struct Concat<S> {
    parts: Rc<[S]>,
}

impl<S> Concat<S> {
    pub(crate) fn new<P>(parts: P) -> Self
    where
        P: IntoIterator<Item = S>,
    {
        Self {
            parts: parts.into_iter().collect(),
        }
    }
}

impl<S> Clone for Concat<S> {
    fn clone(&self) -> Self {
        Self {
            parts: Rc::clone(&self.parts),
        }
    }
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Enumerator = ConcatEnumerator<S>;

    fn enumerate(&self) -> Self::Enumerator {
        ConcatEnumerator {
            parts: Rc::clone(&self.parts),
            next_part: 0,
            current: None,
        }
    }
}

/// Enumerator for [`Concat`].
pub struct ConcatEnumerator<S>
where
    S: Sequence,
{
    parts: Rc<[S]>,
    next_part: usize,
    current: Option<S::Enumerator>,
}

impl<S> Iterator for ConcatEnumerator<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(value) = current.next() {
                    return Some(value);
                }
                self.current = None;
            }
            let part = self.parts.get(self.next_part)?;
            self.next_part += 1;
            self.current = Some(part.enumerate());
        }
    }
}

/// Yields all of one sequence, then all of another.
///
/// Created by [`SequenceExt::chain`](crate::sequence::SequenceExt::chain).
pub struct Chain<A, B> {
    first: A,
    second: Rc<B>,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second: Rc::new(second),
        }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Enumerator = ChainEnumerator<A::Enumerator, B>;

    fn enumerate(&self) -> Self::Enumerator {
        ChainEnumerator {
            first: Some(self.first.enumerate()),
            second: Rc::clone(&self.second),
            second_enumerator: None,
        }
    }
}

/// Enumerator for [`Chain`].
pub struct ChainEnumerator<I, B>
where
    B: Sequence,
{
    first: Option<I>,
    second: Rc<B>,
    second_enumerator: Option<B::Enumerator>,
}

impl<I, B> Iterator for ChainEnumerator<I, B>
where
    I: Iterator,
    B: Sequence<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(first) = &mut self.first {
            if let Some(value) = first.next() {
                return Some(value);
            }
            self.first = None;
        }
        self.second_enumerator
            .get_or_insert_with(|| self.second.enumerate())
            .next()
    }
}
