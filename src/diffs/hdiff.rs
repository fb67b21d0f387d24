use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    diffs::{myers::diff_main, raw_operation::RawOperation},
    utils::union_find::Renumber,
};

/// Kind of a [`Change`]: -1 for deletions, 0 for kept items and 1 for
/// insertions.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ChangeType {
    Deleted = -1,
    Constant = 0,
    Inserted = 1,
}

/// One step of a diff between a sequence of `A`-s and a sequence of `B`-s.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<A, B> {
    /// Only present in the old sequence
    Deleted(A),
    /// Present in both sequences, paired up
    Constant(A, B),
    /// Only present in the new sequence
    Inserted(B),
}

impl<A, B> Change<A, B> {
    #[must_use]
    pub fn change_type(&self) -> ChangeType {
        match self {
            Change::Deleted(_) => ChangeType::Deleted,
            Change::Constant(_, _) => ChangeType::Constant,
            Change::Inserted(_) => ChangeType::Inserted,
        }
    }

    /// The item from the old sequence, if any.
    #[must_use]
    pub fn a(&self) -> Option<&A> {
        match self {
            Change::Deleted(a) | Change::Constant(a, _) => Some(a),
            Change::Inserted(_) => None,
        }
    }

    /// The item from the new sequence, if any.
    #[must_use]
    pub fn b(&self) -> Option<&B> {
        match self {
            Change::Constant(_, b) | Change::Inserted(b) => Some(b),
            Change::Deleted(_) => None,
        }
    }
}

/// Diffs two sequences of possibly different item types by comparing the keys
/// they project to.
///
/// Every item of `xs` shows up exactly once in the result, either `Deleted` or
/// as the first half of a `Constant`, in its original order. The same goes
/// for `ys` with `Inserted` and the second half of a `Constant`.
///
/// ```
/// use parallel_corpus::{Change, hdiff};
///
/// let changes = hdiff(&["a", "b"], &['B', 'C'], |x| x.to_string(), |y| y.to_lowercase().to_string());
/// assert_eq!(changes, [Change::Deleted("a"), Change::Constant("b", 'B'), Change::Inserted('C')]);
/// ```
pub fn hdiff<A, B, K>(
    xs: &[A],
    ys: &[B],
    a_key: impl Fn(&A) -> K,
    b_key: impl Fn(&B) -> K,
) -> Vec<Change<A, B>>
where
    A: Clone,
    B: Clone,
    K: Clone + Eq + Hash,
{
    // Keys get interned so that the diff only compares small integers
    let mut symbols: Renumber<K> = Renumber::new();
    let old: Vec<usize> = xs.iter().map(|x| symbols.num(&a_key(x))).collect();
    let new: Vec<usize> = ys.iter().map(|y| symbols.num(&b_key(y))).collect();

    let mut old_items = xs.iter();
    let mut new_items = ys.iter();

    let mut changes = Vec::with_capacity(xs.len().max(ys.len()));
    for operation in diff_main(&old, &new) {
        let count = operation.len();
        match operation {
            RawOperation::Equal(_) => changes.extend(
                old_items
                    .by_ref()
                    .zip(new_items.by_ref())
                    .take(count)
                    .map(|(a, b)| Change::Constant(a.clone(), b.clone())),
            ),
            RawOperation::Delete(_) => changes.extend(
                old_items
                    .by_ref()
                    .take(count)
                    .map(|a| Change::Deleted(a.clone())),
            ),
            RawOperation::Insert(_) => changes.extend(
                new_items
                    .by_ref()
                    .take(count)
                    .map(|b| Change::Inserted(b.clone())),
            ),
        }
    }

    changes
}
