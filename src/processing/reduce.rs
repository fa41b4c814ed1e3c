//! Full-pass terminal operators.
//!
//! Each function drives exactly one enumeration of the sequence to exhaustion. There is no
//! shortcut: every upstream operator still runs once per element.

use crate::sequence::Sequence;

/// Invoke `action` once per element, in order.
pub fn for_each<S, A>(sequence: &S, mut action: A)
where
    S: Sequence + ?Sized,
    A: FnMut(S::Item),
{
    for value in sequence.enumerate() {
        action(value);
    }
}

/// Collect every element into a `Vec`, preserving order.
pub fn to_vec<S>(sequence: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
{
    let mut out = Vec::new();
    for_each(sequence, |value| out.push(value));
    out
}

/// Left fold: threads `accum = accumulator(accum, value)` through the elements in order.
///
/// Returns `identity` unchanged for an empty sequence.
pub fn reduce<S, A, F>(sequence: &S, identity: A, mut accumulator: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, S::Item) -> A,
{
    let mut accum = identity;
    for value in sequence.enumerate() {
        accum = accumulator(accum, value);
    }
    accum
}

/// Number of elements in one full pass.
pub fn count<S>(sequence: &S) -> usize
where
    S: Sequence + ?Sized,
{
    reduce(sequence, 0usize, |n, _| n + 1)
}

#[cfg(test)]
mod tests {
    use super::{count, reduce, to_vec};
    use crate::sequence::SequenceExt;
    use crate::source::{empty, of};

    #[test]
    fn reduce_threads_accumulator_in_order() {
        let out = reduce(&of(["a", "b", "c", "d", "e"]), "prefix".to_string(), |acc, v| {
            format!("{acc}-{v}")
        });
        assert_eq!(out, "prefix-a-b-c-d-e");
    }

    #[test]
    fn reduce_empty_returns_identity() {
        let out = empty::<&str>().reduce("prefix".to_string(), |acc, v| format!("{acc}-{v}"));
        assert_eq!(out, "prefix");
    }

    #[test]
    fn count_and_to_vec_agree() {
        let seq = of([4, 5, 6]).filter(|v| *v != 5);
        assert_eq!(count(&seq), 2);
        assert_eq!(to_vec(&seq), vec![4, 6]);
        assert_eq!(count(&empty::<u8>()), 0);
    }

    #[test]
    fn count_invokes_every_operator_per_element() {
        let calls = std::cell::Cell::new(0);
        let n = of([1, 2, 3]).map(|v| {
            calls.set(calls.get() + 1);
            v * 2
        });
        assert_eq!(n.count(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = Vec::new();
        of(["x", "y", "z"]).for_each(|v| seen.push(v));
        assert_eq!(seen, vec!["x", "y", "z"]);
    }
}
