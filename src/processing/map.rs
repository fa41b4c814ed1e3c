//! One-to-one and one-to-many element mapping.

use std::rc::Rc;

use crate::sequence::Sequence;

/// Yields `mapper(value)` for every upstream element.
///
/// Created by [`SequenceExt::map`](crate::sequence::SequenceExt::map).
pub struct Map<S, F> {
    upstream: S,
    mapper: Rc<F>,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self {
            upstream,
            mapper: Rc::new(mapper),
        }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Enumerator = MapEnumerator<S::Enumerator, F>;

    fn enumerate(&self) -> Self::Enumerator {
        MapEnumerator {
            upstream: self.upstream.enumerate(),
            mapper: Rc::clone(&self.mapper),
        }
    }
}

/// Enumerator for [`Map`].
pub struct MapEnumerator<I, F> {
    upstream: I,
    mapper: Rc<F>,
}

impl<I, F, U> Iterator for MapEnumerator<I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.upstream.next().map(|value| (self.mapper)(value))
    }
}

/// Yields every element of the sequence `mapper` returns for each upstream element.
///
/// Output order is upstream-major, inner-minor. An inner sequence is enumerated only when the
/// outer element that produced it is reached, so inner sequences may be infinite as long as
/// something downstream stops pulling.
///
/// Created by [`SequenceExt::flat_map`](crate::sequence::SequenceExt::flat_map).
pub struct FlatMap<S, F> {
    upstream: S,
    mapper: Rc<F>,
}

impl<S, F> FlatMap<S, F> {
    pub(crate) fn new(upstream: S, mapper: F) -> Self {
        Self {
            upstream,
            mapper: Rc::new(mapper),
        }
    }
}

impl<S, F, U> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
    U: Sequence,
{
    type Item = U::Item;
    type Enumerator = FlatMapEnumerator<S::Enumerator, F, U>;

    fn enumerate(&self) -> Self::Enumerator {
        FlatMapEnumerator {
            upstream: self.upstream.enumerate(),
            mapper: Rc::clone(&self.mapper),
            inner: None,
        }
    }
}

/// Enumerator for [`FlatMap`].
pub struct FlatMapEnumerator<I, F, U>
where
    U: Sequence,
{
    upstream: I,
    mapper: Rc<F>,
    inner: Option<U::Enumerator>,
}

impl<I, F, U> Iterator for FlatMapEnumerator<I, F, U>
where
    I: Iterator,
    F: Fn(I::Item) -> U,
    U: Sequence,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(value) = inner.next() {
                    return Some(value);
                }
                self.inner = None;
            }
            let outer = self.upstream.next()?;
            self.inner = Some((self.mapper)(outer).enumerate());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::sequence::SequenceExt;
    use crate::source::{empty, iterate, of};

    #[test]
    fn map_applies_function_elementwise() {
        let input = of(["a", "bb", "ccc"]);
        let lengths = (&input).map(str::len).to_vec();
        let expected: Vec<usize> = input.to_vec().into_iter().map(str::len).collect();
        assert_eq!(lengths, expected);
    }

    #[test]
    fn map_can_change_element_type() {
        let out = of([1, 2, 3]).map(|v| format!("#{v}")).to_vec();
        assert_eq!(out, vec!["#1", "#2", "#3"]);
    }

    #[test]
    fn flat_map_is_upstream_major_inner_minor() {
        let out = of([1, 2, 3]).flat_map(|n| of(vec![n; n])).to_vec();
        assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn flat_map_skips_empty_inner_sequences() {
        let out = of([0usize, 2, 0, 1])
            .flat_map(|n| of(vec!["x"; n]).chain(empty()))
            .to_vec();
        assert_eq!(out, vec!["x", "x", "x"]);
    }

    #[test]
    fn flat_map_pulls_outer_elements_on_demand() {
        let outer_pulls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&outer_pulls);
        let seq = iterate(0, |n| n + 1)
            .peek(move |_| counter.set(counter.get() + 1))
            .flat_map(|n| iterate(n * 10, |v| v + 1).limit(2))
            .limit(3);

        assert_eq!(seq.to_vec(), vec![0, 1, 10]);
        assert_eq!(outer_pulls.get(), 2);
    }
}
