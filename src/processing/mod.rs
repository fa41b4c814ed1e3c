//! Intermediate and terminal operators.
//!
//! Intermediate operators wrap an upstream [`crate::sequence::Sequence`] into a new node; nothing
//! is evaluated until a terminal operator pulls. Terminal operators drive one enumeration pass
//! and stop pulling as soon as their result is known.
//!
//! Intermediate nodes (built through [`crate::sequence::SequenceExt`]):
//!
//! - [`Filter`], [`Map`], [`FlatMap`], [`Peek`]: element-lazy, no buffering
//! - [`Skip`], [`SkipWhile`], [`Limit`], [`LimitWhile`]: per-pass counters/flags; limits never
//!   pull past the last element they yield
//! - [`Distinct`]: per-pass list of accepted elements
//! - [`Sorted`]: drains the upstream into a buffer on first pull (never use on infinite input)
//!
//! Terminal operators:
//!
//! - [`reduce`]: full passes (`for_each`, `to_vec`, `reduce`, `count`)
//! - [`matching`]: short-circuiting predicates (`all_match`, `any_match`, `none_match`)
//! - [`find`]: `find_first` (one pull), `find_last`, `max_by`, `min_by` (full pass)
//!
//! ## Example: filter → map → limit → reduce
//!
//! ```rust
//! use lazy_sequence::source::iterate;
//! use lazy_sequence::SequenceExt;
//!
//! // Infinite source; `limit` stops pulling after the fifth accepted square.
//! let squares = iterate(1u64, |n| n + 1)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .limit(5);
//!
//! assert_eq!(squares.to_vec(), vec![1, 9, 25, 49, 81]);
//! assert_eq!(squares.reduce(0, |acc, v| acc + v), 165);
//! ```

pub mod distinct;
pub mod filter;
pub mod find;
pub mod limit;
pub mod map;
pub mod matching;
pub mod peek;
pub mod reduce;
pub mod skip;
pub mod sorted;

pub use distinct::Distinct;
pub use filter::Filter;
pub use limit::{Limit, LimitWhile};
pub use map::{FlatMap, Map};
pub use peek::Peek;
pub use skip::{Skip, SkipWhile};
pub use sorted::Sorted;

/// Clamp a caller-supplied element count: negative counts behave like zero.
pub(crate) fn clamp_count(count: i64) -> u64 {
    count.max(0) as u64
}
