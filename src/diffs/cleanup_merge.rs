use std::mem;

use crate::{
    diffs::raw_operation::RawOperation,
    utils::common_affix_len::{common_prefix_len, common_suffix_len},
};

/// Normalises a diff in place: runs of edits between two equalities are
/// merged into at most one deletion followed by at most one insertion, common
/// affixes of those are factored out into the neighbouring equalities, and
/// single edits surrounded by equalities are slid sideways when that lets two
/// equalities merge. Repeats until nothing changes.
pub fn cleanup_merge<T>(diff: &mut Vec<RawOperation<T>>)
where
    T: PartialEq + Clone,
{
    loop {
        merge_runs(diff);
        if !shift_single_edits(diff) {
            break;
        }
    }
}

fn merge_runs<T>(diff: &mut Vec<RawOperation<T>>)
where
    T: PartialEq + Clone,
{
    // Sentinel so that the last run gets flushed
    diff.push(RawOperation::Equal(Vec::new()));

    let mut pointer = 0;
    let mut count_delete = 0;
    let mut count_insert = 0;
    let mut deleted: Vec<T> = Vec::new();
    let mut inserted: Vec<T> = Vec::new();

    while pointer < diff.len() {
        if diff[pointer].is_insert() {
            count_insert += 1;
            inserted.extend_from_slice(diff[pointer].items());
            pointer += 1;
            continue;
        }

        if diff[pointer].is_delete() {
            count_delete += 1;
            deleted.extend_from_slice(diff[pointer].items());
            pointer += 1;
            continue;
        }

        let run_len = count_delete + count_insert;
        if run_len > 1 {
            if count_delete != 0 && count_insert != 0 {
                let prefix_len = common_prefix_len(&inserted, &deleted);
                if prefix_len != 0 {
                    let common: Vec<T> = inserted.drain(..prefix_len).collect();
                    deleted.drain(..prefix_len);

                    // The run is either preceded by an equality or starts the diff
                    match (pointer - run_len).checked_sub(1) {
                        Some(before) if diff[before].is_equal() => {
                            diff[before].items_mut().extend(common);
                        }
                        _ => {
                            diff.insert(0, RawOperation::Equal(common));
                            pointer += 1;
                        }
                    }
                }

                let suffix_len = common_suffix_len(&inserted, &deleted);
                if suffix_len != 0 {
                    let common = inserted.split_off(inserted.len() - suffix_len);
                    deleted.truncate(deleted.len() - suffix_len);
                    diff[pointer].items_mut().splice(0..0, common);
                }
            }

            let replacement: Vec<RawOperation<T>> = [
                RawOperation::Delete(mem::take(&mut deleted)),
                RawOperation::Insert(mem::take(&mut inserted)),
            ]
            .into_iter()
            .filter(|operation| !operation.is_empty())
            .collect();

            pointer -= run_len;
            let replacement_len = replacement.len();
            diff.splice(pointer..pointer + run_len, replacement);
            pointer += replacement_len + 1;
        } else if pointer != 0 && diff[pointer - 1].is_equal() {
            let items = diff.remove(pointer).into_items();
            diff[pointer - 1].items_mut().extend(items);
        } else {
            pointer += 1;
        }

        count_insert = 0;
        count_delete = 0;
        deleted.clear();
        inserted.clear();
    }

    if diff.last().is_some_and(RawOperation::is_empty) {
        diff.pop();
    }
}

/// Looks for single edits surrounded on both sides by equalities which can be
/// shifted sideways to eliminate an equality, e.g: `A<ins>BA</ins>C` ->
/// `<ins>AB</ins>AC`.
///
/// Returns whether anything has changed.
fn shift_single_edits<T>(diff: &mut Vec<RawOperation<T>>) -> bool
where
    T: PartialEq + Clone,
{
    let mut changes = false;

    let mut pointer = 1;
    while pointer + 1 < diff.len() {
        if diff[pointer - 1].is_equal() && diff[pointer + 1].is_equal() {
            let previous = diff[pointer - 1].items().clone();
            let next = diff[pointer + 1].items().clone();
            let edit = diff[pointer].items().clone();

            if edit.ends_with(&previous) {
                // Shift the edit over the previous equality
                if !previous.is_empty() {
                    *diff[pointer].items_mut() = previous
                        .iter()
                        .chain(&edit[..edit.len() - previous.len()])
                        .cloned()
                        .collect();
                    *diff[pointer + 1].items_mut() =
                        previous.iter().chain(&next).cloned().collect();
                }
                diff.remove(pointer - 1);
                changes = true;
            } else if edit.starts_with(&next) {
                // Shift the edit over the next equality
                diff[pointer - 1].items_mut().extend_from_slice(&next);
                *diff[pointer].items_mut() =
                    edit[next.len()..].iter().chain(&next).cloned().collect();
                diff.remove(pointer + 1);
                changes = true;
            }
        }

        pointer += 1;
    }

    changes
}
