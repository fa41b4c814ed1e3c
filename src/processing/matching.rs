//! Short-circuiting predicate terminals.

use crate::sequence::Sequence;

/// `true` if no element fails `predicate`; vacuously `true` when empty.
///
/// Stops pulling at the first failure.
pub fn all_match<S, P>(sequence: &S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    for value in sequence.enumerate() {
        if !predicate(&value) {
            return false;
        }
    }
    true
}

/// `true` at the first element satisfying `predicate`; `false` only after a full pass.
pub fn any_match<S, P>(sequence: &S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    for value in sequence.enumerate() {
        if predicate(&value) {
            return true;
        }
    }
    false
}

/// `true` if no element satisfies `predicate`. Stops pulling at the first match.
pub fn none_match<S, P>(sequence: &S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    !any_match(sequence, predicate)
}
