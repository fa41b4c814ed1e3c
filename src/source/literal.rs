//! Fixed-value sources.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::sequence::Sequence;

/// A fixed list of values. Built by [`super::of`].
///
/// The values are stored once and cloned out on each pass; cloning the node is cheap.
pub struct Of<T> {
    values: Rc<[T]>,
}

impl<T> Of<T> {
    pub(crate) fn new<V>(values: V) -> Self
    where
        V: IntoIterator<Item = T>,
    {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of values held by the source.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when the source holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Clone for Of<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Of<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Of").field(&self.values).finish()
    }
}

impl<T: Clone> Sequence for Of<T> {
    type Item = T;
    type Enumerator = OfEnumerator<T>;

    fn enumerate(&self) -> Self::Enumerator {
        OfEnumerator {
            values: Rc::clone(&self.values),
            position: 0,
        }
    }
}

/// Enumerator for [`Of`].
pub struct OfEnumerator<T> {
    values: Rc<[T]>,
    position: usize,
}

impl<T: Clone> Iterator for OfEnumerator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.values.get(self.position)?.clone();
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.position;
        (remaining, Some(remaining))
    }
}

/// A sequence with no elements. Built by [`super::empty`].
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Enumerator = std::iter::Empty<T>;

    fn enumerate(&self) -> Self::Enumerator {
        std::iter::empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::SequenceExt;
    use crate::source::{empty, of};

    #[test]
    fn of_is_reiterable() {
        let seq = of(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(seq.to_vec(), vec!["a", "b"]);
        assert_eq!(seq.to_vec(), vec!["a", "b"]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn of_with_no_values_is_empty() {
        let seq = of(Vec::<i32>::new());
        assert!(seq.is_empty());
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn empty_yields_nothing_every_time() {
        let seq = empty::<String>();
        assert!(seq.to_vec().is_empty());
        assert!(seq.to_vec().is_empty());
    }
}
