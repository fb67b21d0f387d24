use crate::{
    diffs::{cleanup_merge::cleanup_merge, raw_operation::RawOperation},
    utils::common_affix_len::{common_overlap_len, common_suffix_len},
};

/// Makes a character diff easier to read by humans: short equalities stuck
/// between larger edits are folded into the edits, edits are aligned to word
/// and line boundaries where possible, and overlaps between neighbouring
/// deletions and insertions are turned into equalities.
pub fn cleanup_semantic(diff: &mut Vec<RawOperation<char>>) {
    if eliminate_small_equalities(diff) {
        cleanup_merge(diff);
    }

    cleanup_semantic_lossless(diff);
    extract_overlaps(diff);
}

/// Replaces equalities that are no longer than the edits on both of their
/// sides with a deletion and an insertion. Returns whether anything has
/// changed.
fn eliminate_small_equalities<T: Clone>(diff: &mut Vec<RawOperation<T>>) -> bool {
    let mut changes = false;

    // Indices of the equalities seen so far
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality_len = 0;

    // Number of items changed before and after the last equality
    let (mut insertions_before, mut deletions_before) = (0, 0);
    let (mut insertions_after, mut deletions_after) = (0, 0);

    let mut pointer = 0;
    while pointer < diff.len() {
        if diff[pointer].is_equal() {
            equalities.push(pointer);
            insertions_before = insertions_after;
            deletions_before = deletions_after;
            insertions_after = 0;
            deletions_after = 0;
            last_equality_len = diff[pointer].len();
            pointer += 1;
            continue;
        }

        if diff[pointer].is_insert() {
            insertions_after += diff[pointer].len();
        } else {
            deletions_after += diff[pointer].len();
        }

        let is_small = last_equality_len > 0
            && last_equality_len <= insertions_before.max(deletions_before)
            && last_equality_len <= insertions_after.max(deletions_after);

        if let Some(&index) = equalities.last().filter(|_| is_small) {
            let items = diff[index].items().clone();
            diff.insert(index, RawOperation::Delete(items.clone()));
            diff[index + 1] = RawOperation::Insert(items);

            // Throw away the equality we just deleted and the one before it,
            // the latter needs to be reevaluated
            equalities.pop();
            equalities.pop();

            insertions_before = 0;
            deletions_before = 0;
            insertions_after = 0;
            deletions_after = 0;
            last_equality_len = 0;
            changes = true;

            pointer = equalities.last().map_or(0, |&index| index + 1);
            continue;
        }

        pointer += 1;
    }

    changes
}

/// Looks for single edits surrounded on both sides by equalities which can be
/// shifted sideways to align the edit to a word boundary, e.g:
/// `The c<ins>at c</ins>ame.` -> `The <ins>cat </ins>came.`
fn cleanup_semantic_lossless(diff: &mut Vec<RawOperation<char>>) {
    let mut pointer = 1;
    while pointer + 1 < diff.len() {
        if !(diff[pointer - 1].is_equal() && diff[pointer + 1].is_equal()) {
            pointer += 1;
            continue;
        }

        let mut equality1 = diff[pointer - 1].items().clone();
        let mut edit = diff[pointer].items().clone();
        let mut equality2 = diff[pointer + 1].items().clone();

        // First, shift the edit as far left as possible
        let offset = common_suffix_len(&equality1, &edit);
        if offset > 0 {
            let common = edit.split_off(edit.len() - offset);
            equality1.truncate(equality1.len() - offset);
            edit = common.iter().chain(&edit).copied().collect();
            equality2 = common.into_iter().chain(equality2).collect();
        }

        // Second, step character by character right, looking for the best fit
        let mut best_equality1 = equality1.clone();
        let mut best_edit = edit.clone();
        let mut best_equality2 = equality2.clone();
        let mut best_score = semantic_score(&equality1, &edit) + semantic_score(&edit, &equality2);

        while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
            let moved = equality2.remove(0);
            equality1.push(moved);
            edit.remove(0);
            edit.push(moved);

            let score = semantic_score(&equality1, &edit) + semantic_score(&edit, &equality2);
            // The `>=` encourages trailing rather than leading whitespace on edits
            if score >= best_score {
                best_score = score;
                best_equality1.clone_from(&equality1);
                best_edit.clone_from(&edit);
                best_equality2.clone_from(&equality2);
            }
        }

        if *diff[pointer - 1].items() == best_equality1 {
            pointer += 1;
            continue;
        }

        let mut edit_index = pointer;
        if best_equality1.is_empty() {
            diff.remove(pointer - 1);
            edit_index -= 1;
        } else {
            *diff[pointer - 1].items_mut() = best_equality1;
        }

        *diff[edit_index].items_mut() = best_edit;

        let mut removed = pointer - edit_index;
        if best_equality2.is_empty() {
            diff.remove(edit_index + 1);
            removed += 1;
        } else {
            *diff[edit_index + 1].items_mut() = best_equality2;
        }

        pointer = pointer + 1 - removed;
    }
}

/// Scores how well the boundary between `one` and `two` falls on a logical
/// boundary. Higher is better.
///
/// * 6: the edge of the text
/// * 5: blank line
/// * 4: line break
/// * 3: end of a sentence
/// * 2: whitespace
/// * 1: non-alphanumeric character
/// * 0: inside a word
fn semantic_score(one: &[char], two: &[char]) -> u8 {
    let (Some(&char1), Some(&char2)) = (one.last(), two.first()) else {
        return 6;
    };

    let non_alphanumeric1 = !char1.is_alphanumeric();
    let non_alphanumeric2 = !char2.is_alphanumeric();
    let whitespace1 = non_alphanumeric1 && char1.is_whitespace();
    let whitespace2 = non_alphanumeric2 && char2.is_whitespace();
    let line_break1 = whitespace1 && (char1 == '\r' || char1 == '\n');
    let line_break2 = whitespace2 && (char2 == '\r' || char2 == '\n');
    let blank_line1 = line_break1 && ends_with_blank_line(one);
    let blank_line2 = line_break2 && starts_with_blank_line(two);

    if blank_line1 || blank_line2 {
        5
    } else if line_break1 || line_break2 {
        4
    } else if non_alphanumeric1 && !whitespace1 && whitespace2 {
        3
    } else if whitespace1 || whitespace2 {
        2
    } else if non_alphanumeric1 || non_alphanumeric2 {
        1
    } else {
        0
    }
}

fn ends_with_blank_line(text: &[char]) -> bool {
    text.ends_with(&['\n', '\n']) || text.ends_with(&['\n', '\r', '\n'])
}

fn starts_with_blank_line(text: &[char]) -> bool {
    let rest = text.strip_prefix(&['\r']).unwrap_or(text);
    let Some(rest) = rest.strip_prefix(&['\n']) else {
        return false;
    };
    let rest = rest.strip_prefix(&['\r']).unwrap_or(rest);
    rest.starts_with(&['\n'])
}

/// Finds overlaps between a deletion and the insertion right after it, e.g:
/// `<del>abcxxx</del><ins>xxxdef</ins>` -> `<del>abc</del>xxx<ins>def</ins>`
/// and `<del>xxxabc</del><ins>defxxx</ins>` -> `<ins>def</ins>xxx<del>abc</del>`.
///
/// Only overlaps as big as half of the edit ahead or behind are extracted.
fn extract_overlaps<T: PartialEq + Clone>(diff: &mut Vec<RawOperation<T>>) {
    let mut pointer = 1;
    while pointer < diff.len() {
        if diff[pointer - 1].is_delete() && diff[pointer].is_insert() {
            let deletion = diff[pointer - 1].items().clone();
            let insertion = diff[pointer].items().clone();
            let overlap1 = common_overlap_len(&deletion, &insertion);
            let overlap2 = common_overlap_len(&insertion, &deletion);

            if overlap1 >= overlap2 {
                if overlap1 * 2 >= deletion.len() || overlap1 * 2 >= insertion.len() {
                    diff.insert(pointer, RawOperation::equal(&insertion[..overlap1]));
                    diff[pointer - 1] =
                        RawOperation::delete(&deletion[..deletion.len() - overlap1]);
                    diff[pointer + 1] = RawOperation::insert(&insertion[overlap1..]);
                    pointer += 1;
                }
            } else if overlap2 * 2 >= deletion.len() || overlap2 * 2 >= insertion.len() {
                // Reverse overlap, swap the edits around the equality
                diff.insert(pointer, RawOperation::equal(&deletion[..overlap2]));
                diff[pointer - 1] =
                    RawOperation::insert(&insertion[..insertion.len() - overlap2]);
                diff[pointer + 1] = RawOperation::delete(&deletion[overlap2..]);
                pointer += 1;
            }

            pointer += 1;
        }

        pointer += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    fn eq(text: &str) -> RawOperation<char> { RawOperation::Equal(chars(text)) }

    fn ins(text: &str) -> RawOperation<char> { RawOperation::Insert(chars(text)) }

    fn del(text: &str) -> RawOperation<char> { RawOperation::Delete(chars(text)) }

    fn cleaned(mut diff: Vec<RawOperation<char>>) -> Vec<RawOperation<char>> {
        cleanup_semantic(&mut diff);
        diff
    }

    #[test]
    fn test_no_elimination() {
        let diff = vec![del("ab"), ins("cd"), eq("12"), del("e")];
        assert_eq!(cleaned(diff.clone()), diff);

        let diff = vec![del("abc"), ins("ABC"), eq("1234"), del("wxyz")];
        assert_eq!(cleaned(diff.clone()), diff);
    }

    #[test]
    fn test_simple_elimination() {
        assert_eq!(
            cleaned(vec![del("a"), eq("b"), del("c")]),
            vec![del("abc"), ins("b")]
        );
    }

    #[test]
    fn test_backpass_elimination() {
        assert_eq!(
            cleaned(vec![del("ab"), eq("cd"), del("e"), eq("f"), ins("g")]),
            vec![del("abcdef"), ins("cdfg")]
        );
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(
            cleaned(vec![eq("The c"), del("ow and the c"), eq("at.")]),
            vec![eq("The "), del("cow and the "), eq("cat.")]
        );
    }

    #[test]
    fn test_overlaps() {
        let diff = vec![del("abcxx"), ins("xxdef")];
        assert_eq!(cleaned(diff.clone()), diff);

        assert_eq!(
            cleaned(vec![del("abcxxx"), ins("xxxdef")]),
            vec![del("abc"), eq("xxx"), ins("def")]
        );
        assert_eq!(
            cleaned(vec![del("xxxabc"), ins("defxxx")]),
            vec![ins("def"), eq("xxx"), del("abc")]
        );
        assert_eq!(
            cleaned(vec![
                del("abcd1212"),
                ins("1212efghi"),
                eq("----"),
                del("A3"),
                ins("3BC")
            ]),
            vec![
                del("abcd"),
                eq("1212"),
                ins("efghi"),
                eq("----"),
                del("A"),
                eq("3"),
                ins("BC")
            ]
        );
    }

    #[test]
    fn test_semantic_score() {
        assert_eq!(semantic_score(&chars(""), &chars("a")), 6);
        assert_eq!(semantic_score(&chars("a\n\n"), &chars("b")), 5);
        assert_eq!(semantic_score(&chars("a"), &chars("\r\n\r\nb")), 5);
        assert_eq!(semantic_score(&chars("a\n"), &chars("b")), 4);
        assert_eq!(semantic_score(&chars("a."), &chars(" b")), 3);
        assert_eq!(semantic_score(&chars("a "), &chars("b")), 2);
        assert_eq!(semantic_score(&chars("a-"), &chars("b")), 1);
        assert_eq!(semantic_score(&chars("a"), &chars("b")), 0);
    }
}
