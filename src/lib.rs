//! `lazy-sequence` is a small library for building lazy, composable, pull-based pipelines over
//! finite or infinite sources of values.
//!
//! A pipeline is a chain of [`Sequence`] nodes. Building a chain never touches data; only a
//! terminal operator (such as [`SequenceExt::to_vec`] or [`SequenceExt::any_match`]) pulls
//! elements, one at a time, from the deepest source up through every node. Operators between the
//! terminal and the source never pull more than the terminal needs, so `limit`, `limit_while`,
//! `find_first` and the `*_match` terminals are safe on infinite sources.
//!
//! ## Quick example: shape an in-memory list
//!
//! ```rust
//! use lazy_sequence::source::of;
//! use lazy_sequence::SequenceExt;
//!
//! let words = of(["pear", "fig", "apple", "fig", "kiwi", "plum"]);
//!
//! let shortlist = (&words)
//!     .distinct()
//!     .filter(|w| w.len() <= 4)
//!     .sorted_by(|a, b| a.cmp(b))
//!     .skip(1)
//!     .limit(2);
//!
//! assert_eq!(shortlist.to_vec(), vec!["kiwi", "pear"]);
//! assert_eq!(words.count(), 6);
//! ```
//!
//! ## Infinite sources
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use lazy_sequence::source::iterate;
//! use lazy_sequence::SequenceExt;
//!
//! let pulled = Cell::new(0);
//! let powers = iterate(1u64, |n| n * 2)
//!     .peek(|_| pulled.set(pulled.get() + 1))
//!     .limit(10);
//!
//! assert_eq!(powers.find_last_or(0), 512);
//! assert_eq!(pulled.get(), 10);
//! ```
//!
//! ## Modules
//!
//! - [`sequence`]: the [`Sequence`] contract, [`SequenceExt`] chaining API, [`BoxedSequence`]
//! - [`source`]: source constructors (`of`, `empty`, `of_iterable`, `of_iterator`,
//!   `of_generator`, `iterate`, `concat`, record readers)
//! - [`processing`]: intermediate operator nodes and terminal operator implementations
//! - [`execution`]: labelled runs with observer events, metrics, and pull budgets
//! - [`error`]: error types for fallible sources and metered runs
//!
//! ### Terminal operators
//!
//! - Full pass: `for_each`, `to_vec`, `reduce`, `count`, `find_last(_or)`, `max_by(_or)`,
//!   `min_by(_or)`
//! - Short-circuiting: `all_match`, `any_match`, `none_match`, `find_first(_or)`
//!
//! Panics raised by caller-supplied functions propagate unchanged to the caller of the terminal
//! operator; no operator catches them.

pub mod error;
pub mod execution;
pub mod processing;
pub mod sequence;
pub mod source;

pub use error::{SequenceError, SequenceResult};
pub use sequence::{BoxedSequence, Sequence, SequenceExt};
