#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diffs::{RawOperation, semantic_char_diff};

/// A single replacement turning one text into another: the characters
/// `from..to` of the old text are replaced by `insert`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditRange {
    pub from: usize,
    pub to: usize,
    pub insert: String,
}

/// Computes the smallest single replacement (after semantic cleanup) that
/// turns `old` into `new`. Offsets are in characters.
///
/// ```
/// use parallel_corpus::{EditRange, edit_range};
///
/// assert_eq!(
///     edit_range("0123456789", "01xyz89"),
///     EditRange { from: 2, to: 8, insert: "xyz".to_owned() }
/// );
/// ```
#[must_use]
pub fn edit_range(old: &str, new: &str) -> EditRange {
    let diff = semantic_char_diff(old, new);

    let prefix_operations = diff.iter().take_while(|operation| operation.is_equal()).count();
    let prefix_len: usize = diff[..prefix_operations]
        .iter()
        .map(RawOperation::len)
        .sum();

    // Only look for the suffix after the prefix so that equal texts aren't
    // counted twice
    let suffix_len: usize = diff[prefix_operations..]
        .iter()
        .rev()
        .take_while(|operation| operation.is_equal())
        .map(RawOperation::len)
        .sum();

    let old_len = old.chars().count();
    let new_len = new.chars().count();

    EditRange {
        from: prefix_len,
        to: old_len - suffix_len,
        insert: new
            .chars()
            .skip(prefix_len)
            .take(new_len.saturating_sub(prefix_len + suffix_len))
            .collect(),
    }
}
