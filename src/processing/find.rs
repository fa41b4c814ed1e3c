//! Element-selecting terminals.

use std::cmp::Ordering;

use crate::sequence::Sequence;

/// The first element, if any. Pulls at most one element.
pub fn find_first<S>(sequence: &S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    sequence.enumerate().next()
}

/// The last element, if any. Drains the sequence.
pub fn find_last<S>(sequence: &S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    let mut last = None;
    for value in sequence.enumerate() {
        last = Some(value);
    }
    last
}

/// The greatest element by `cmp`, replacing the current best only when
/// `cmp(candidate, best)` is `Greater`. Returns `None` only for an empty sequence.
pub fn max_by<S, C>(sequence: &S, mut cmp: C) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    best_by(sequence, |candidate, best| cmp(candidate, best) == Ordering::Greater)
}

/// The least element by `cmp`, replacing the current best only when
/// `cmp(candidate, best)` is `Less`. Returns `None` only for an empty sequence.
pub fn min_by<S, C>(sequence: &S, mut cmp: C) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    best_by(sequence, |candidate, best| cmp(candidate, best) == Ordering::Less)
}

fn best_by<S, R>(sequence: &S, mut replaces: R) -> Option<S::Item>
where
    S: Sequence + ?Sized,
    R: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut best: Option<S::Item> = None;
    for candidate in sequence.enumerate() {
        let replace = match &best {
            Some(current) => replaces(&candidate, current),
            None => true,
        };
        if replace {
            best = Some(candidate);
        }
    }
    best
}
