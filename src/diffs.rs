mod cleanup_merge;
mod cleanup_semantic;
mod hdiff;
mod myers;
mod raw_operation;

pub use hdiff::{Change, ChangeType, hdiff};
pub(crate) use raw_operation::RawOperation;

/// Character diff of two strings with semantic cleanup applied, so that the
/// edits read like human-made hunks rather than a minimal edit script.
///
/// ```
/// use parallel_corpus::{ChangeType, token_diff};
///
/// assert_eq!(
///     token_diff("The cat came.", "The dog came."),
///     [
///         (ChangeType::Constant, "The ".to_owned()),
///         (ChangeType::Deleted, "cat".to_owned()),
///         (ChangeType::Inserted, "dog".to_owned()),
///         (ChangeType::Constant, " came.".to_owned()),
///     ]
/// );
/// ```
#[must_use]
pub fn token_diff(old: &str, new: &str) -> Vec<(ChangeType, String)> {
    semantic_char_diff(old, new)
        .into_iter()
        .map(|operation| {
            let change_type = match operation {
                RawOperation::Insert(_) => ChangeType::Inserted,
                RawOperation::Delete(_) => ChangeType::Deleted,
                RawOperation::Equal(_) => ChangeType::Constant,
            };
            (change_type, operation.into_items().into_iter().collect())
        })
        .collect()
}

pub(crate) fn semantic_char_diff(old: &str, new: &str) -> Vec<RawOperation<char>> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();

    let mut diff = myers::diff_main(&old, &new);
    cleanup_semantic::cleanup_semantic(&mut diff);
    diff.retain(|operation| !operation.is_empty());

    diff
}
