//! Sources over external iterables and iterators.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::{SequenceError, SequenceResult};
use crate::sequence::Sequence;

/// A re-iterable wrapper around any cloneable [`IntoIterator`]. Built by [`super::of_iterable`].
///
/// Each pass walks a fresh clone, so elements come out verbatim and in encounter order.
#[derive(Debug, Clone)]
pub struct FromIterable<I> {
    iterable: I,
}

impl<I> FromIterable<I> {
    pub(crate) fn new(iterable: I) -> Self {
        Self { iterable }
    }
}

impl<I> Sequence for FromIterable<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Enumerator = I::IntoIter;

    fn enumerate(&self) -> Self::Enumerator {
        self.iterable.clone().into_iter()
    }
}

/// A one-shot source over a live iterator. Built by [`super::of_iterator`].
///
/// All enumerations share the single underlying iterator. A later pass continues where the
/// earlier one stopped, and yields nothing after exhaustion. Clones share the iterator too.
pub struct OneShot<I> {
    iterator: Rc<RefCell<I>>,
    enumerated: Rc<Cell<bool>>,
    strict: bool,
}

impl<I> OneShot<I> {
    pub(crate) fn new(iterator: I) -> Self {
        Self {
            iterator: Rc::new(RefCell::new(iterator)),
            enumerated: Rc::new(Cell::new(false)),
            strict: false,
        }
    }

    /// Fail loudly on re-enumeration instead of silently resuming.
    ///
    /// With this set, the second [`Sequence::enumerate`] call panics with
    /// [`SequenceError::AlreadyConsumed`].
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// `true` once any enumeration has been started.
    pub fn is_enumerated(&self) -> bool {
        self.enumerated.get()
    }

    /// Start the first enumeration, or report [`SequenceError::AlreadyConsumed`] if one was
    /// already started (regardless of [`Self::strict`]).
    pub fn try_enumerate(&self) -> SequenceResult<OneShotEnumerator<I>> {
        if self.enumerated.replace(true) {
            return Err(SequenceError::AlreadyConsumed);
        }
        Ok(OneShotEnumerator {
            iterator: Rc::clone(&self.iterator),
        })
    }
}

impl<I> Clone for OneShot<I> {
    fn clone(&self) -> Self {
        Self {
            iterator: Rc::clone(&self.iterator),
            enumerated: Rc::clone(&self.enumerated),
            strict: self.strict,
        }
    }
}

impl<I> fmt::Debug for OneShot<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneShot")
            .field("enumerated", &self.enumerated.get())
            .field("strict", &self.strict)
            .finish()
    }
}

impl<I> Sequence for OneShot<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Enumerator = OneShotEnumerator<I>;

    /// # Panics
    ///
    /// Panics on a second call when the source was made [`OneShot::strict`].
    fn enumerate(&self) -> Self::Enumerator {
        match self.try_enumerate() {
            Ok(enumerator) => enumerator,
            Err(err) if self.strict => panic!("{err}"),
            Err(_) => OneShotEnumerator {
                iterator: Rc::clone(&self.iterator),
            },
        }
    }
}

/// Enumerator for [`OneShot`]; pulls from the shared iterator.
pub struct OneShotEnumerator<I> {
    iterator: Rc<RefCell<I>>,
}

impl<I> Iterator for OneShotEnumerator<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iterator.borrow_mut().next()
    }
}
