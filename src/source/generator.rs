//! Function-driven sources: [`Generator`] and [`Iterate`].

use std::fmt;
use std::rc::Rc;

use crate::sequence::Sequence;

/// Calls a zero-argument factory on every enumeration. Built by [`super::of_generator`].
///
/// Whether passes see the same data depends only on the factory.
pub struct Generator<F> {
    factory: Rc<F>,
}

impl<F> Generator<F> {
    pub(crate) fn new(factory: F) -> Self {
        Self {
            factory: Rc::new(factory),
        }
    }
}

impl<F> Clone for Generator<F> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<F> fmt::Debug for Generator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

impl<F, I> Sequence for Generator<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Enumerator = I::IntoIter;

    fn enumerate(&self) -> Self::Enumerator {
        (self.factory)().into_iter()
    }
}

/// The infinite sequence `seed, step(&seed), ...`. Built by [`super::iterate`].
pub struct Iterate<T, F> {
    seed: T,
    step: Rc<F>,
}

impl<T, F> Iterate<T, F> {
    pub(crate) fn new(seed: T, step: F) -> Self {
        Self {
            seed,
            step: Rc::new(step),
        }
    }
}

impl<T: Clone, F> Clone for Iterate<T, F> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed.clone(),
            step: Rc::clone(&self.step),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Iterate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iterate")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl<T, F> Sequence for Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type Enumerator = IterateEnumerator<T, F>;

    fn enumerate(&self) -> Self::Enumerator {
        IterateEnumerator {
            state: IterateState::Seed(self.seed.clone()),
            step: Rc::clone(&self.step),
        }
    }
}

enum IterateState<T> {
    Seed(T),
    After(T),
}

/// Enumerator for [`Iterate`].
pub struct IterateEnumerator<T, F> {
    state: IterateState<T>,
    step: Rc<F>,
}

impl<T, F> Iterator for IterateEnumerator<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match &self.state {
            IterateState::Seed(seed) => seed.clone(),
            IterateState::After(previous) => (self.step)(previous),
        };
        self.state = IterateState::After(value.clone());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
