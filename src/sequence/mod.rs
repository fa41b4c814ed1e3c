//! The sequence contract.
//!
//! A [`Sequence`] is a lazily evaluated, ordered, possibly infinite series of values. It exposes
//! exactly one capability: [`Sequence::enumerate`], which hands out a fresh pull-based
//! enumerator (an [`Iterator`]). Obtaining the enumerator never pulls anything; values only flow
//! while the enumerator is advanced.
//!
//! Every chaining method lives on [`SequenceExt`], which is implemented for all sequences.
//!
//! ## Re-iterability
//!
//! Whether a second `enumerate()` yields the same data again is decided by the leaf source, not
//! by the pipeline: [`crate::source::of`] and [`crate::source::of_generator`] restart on every
//! pass, while [`crate::source::of_iterator`] shares one live iterator across passes.

mod boxed;
mod ext;

use std::rc::Rc;

pub use boxed::{BoxedSequence, DynSequence};
pub use ext::SequenceExt;

/// A lazy, single-direction, pull-based series of values.
///
/// Implementors own their upstream nodes and caller-supplied functions. The returned
/// enumerator owns whatever per-pass state the node needs (counters, buffers, upstream
/// enumerators), so independent enumerations never share state unless the leaf source does.
pub trait Sequence {
    /// Element type yielded by this sequence.
    type Item;

    /// Pull-based enumerator produced for each pass.
    type Enumerator: Iterator<Item = Self::Item>;

    /// Start a fresh enumeration pass without consuming any element.
    fn enumerate(&self) -> Self::Enumerator;
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Enumerator = S::Enumerator;

    fn enumerate(&self) -> Self::Enumerator {
        (**self).enumerate()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Enumerator = S::Enumerator;

    fn enumerate(&self) -> Self::Enumerator {
        (**self).enumerate()
    }
}

impl<S> Sequence for Rc<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Enumerator = S::Enumerator;

    fn enumerate(&self) -> Self::Enumerator {
        (**self).enumerate()
    }
}
