//! Source constructors: the leaves of every pipeline.
//!
//! | Constructor | Re-iterable | Notes |
//! |---|---|---|
//! | [`of`] | yes | fixed list of values, cloned out on each pass |
//! | [`empty`] | yes | yields nothing |
//! | [`of_iterable`] | yes | clones the iterable per pass (pass `&vec` or a range to keep it cheap) |
//! | [`of_generator`] | yes | calls the factory anew on every `enumerate()` |
//! | [`iterate`] | yes | infinite `seed, step(seed), ...` |
//! | [`of_iterator`] | no | one live iterator shared by every pass |
//! | [`concat`] / [`SequenceExt::chain`](crate::sequence::SequenceExt::chain) | if all parts are | parts are enumerated lazily, in order |
//! | [`json_lines`] / `csv_records` | no | one-shot record readers yielding `SequenceResult<T>` |
//!
//! A `concat` part that never ends means later parts are never reached.

pub mod concat;
pub mod generator;
pub mod iterable;
pub mod literal;
pub mod records;

pub use concat::{Chain, Concat};
pub use generator::{Generator, Iterate};
pub use iterable::{FromIterable, OneShot};
pub use literal::{Empty, Of};
#[cfg(feature = "csv")]
pub use records::{CsvRecords, csv_records, csv_records_from};
pub use records::{JsonLines, json_lines};

use crate::sequence::Sequence;

/// A fixed, ordered, re-iterable sequence of `values`.
///
/// ```rust
/// use lazy_sequence::source::of;
/// use lazy_sequence::SequenceExt;
///
/// let seq = of(["a", "b", "c"]);
/// assert_eq!(seq.to_vec(), vec!["a", "b", "c"]);
/// assert_eq!(seq.count(), 3);
/// ```
pub fn of<T, V>(values: V) -> Of<T>
where
    T: Clone,
    V: IntoIterator<Item = T>,
{
    Of::new(values)
}

/// A sequence yielding nothing, on every pass.
pub fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// Wrap an existing iterable. Each pass clones `iterable` and walks the clone.
pub fn of_iterable<I>(iterable: I) -> FromIterable<I>
where
    I: IntoIterator + Clone,
{
    FromIterable::new(iterable)
}

/// Wrap a live iterator as a one-shot source.
///
/// Every enumeration pulls from the same iterator: a second pass resumes where the first
/// stopped and is empty once the iterator is exhausted. Call [`OneShot::strict`] to make a
/// second `enumerate()` fail loudly instead.
pub fn of_iterator<I>(iterator: I) -> OneShot<I>
where
    I: Iterator,
{
    OneShot::new(iterator)
}

/// A source that calls `factory` on every `enumerate()` to obtain a fresh producer.
///
/// ```rust
/// use lazy_sequence::source::of_generator;
/// use lazy_sequence::SequenceExt;
///
/// let countdown = of_generator(|| (1..=3).rev());
/// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
/// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
/// ```
pub fn of_generator<F, I>(factory: F) -> Generator<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    Generator::new(factory)
}

/// The infinite sequence `seed, step(&seed), step(&step(&seed)), ...`.
///
/// `step` runs only when the next element is actually pulled.
pub fn iterate<T, F>(seed: T, step: F) -> Iterate<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    Iterate::new(seed, step)
}

/// Yield every element of each part in turn. No parts yields nothing.
pub fn concat<S, P>(parts: P) -> Concat<S>
where
    S: Sequence,
    P: IntoIterator<Item = S>,
{
    Concat::new(parts)
}
