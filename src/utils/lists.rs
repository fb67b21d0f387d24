use std::{collections::HashSet, hash::Hash};

/// Splits a list in two at `index`, clamped to the list's length.
pub fn split_at<T: Clone>(xs: &[T], index: usize) -> (Vec<T>, Vec<T>) {
    let (left, right) = xs.split_at(index.min(xs.len()));
    (left.to_vec(), right.to_vec())
}

/// Splits a list into three pieces: `[..start]`, `[start..end]`, `[end..]`.
///
/// ```not_rust
/// "0123456", 2, 4 -> ["01", "23", "456"]
/// "0123456", 2, 2 -> ["01", "", "23456"]
/// "0123456", 2, 9 -> ["01", "23456", ""]
/// ```
pub fn split_at_3<T: Clone>(xs: &[T], start: usize, end: usize) -> (Vec<T>, Vec<T>, Vec<T>) {
    let (ab, c) = split_at(xs, end);
    let (a, b) = split_at(&ab, start);
    (a, b, c)
}

/// Replaces `count` items from `start` with `insert`, returning the new list
/// and the removed items. The input is left untouched.
pub fn splice<T: Clone>(
    xs: &[T],
    start: usize,
    count: usize,
    insert: impl IntoIterator<Item = T>,
) -> (Vec<T>, Vec<T>) {
    let mut result = xs.to_vec();
    let start = start.min(result.len());
    let end = (start + count).min(result.len());
    let removed = result.splice(start..end, insert).collect();

    (result, removed)
}

/// Moves the slice `[begin..=end]` so that it's put back at `dest`.
///
/// ```not_rust
/// [0, 1, 2, 3], 1, 2, 0 -> [1, 2, 0, 3]
/// [0, 1, 2, 3], 1, 2, 3 -> [0, 3, 1, 2]
/// [0, 1, 2, 3], 1, 2, 1 -> [0, 1, 2, 3]
/// [0, 1, 2, 3], 1, 2, 2 -> [0, 1, 2, 3]
/// ```
pub fn rearrange<T: Clone>(xs: &[T], begin: usize, end: usize, dest: usize) -> Vec<T> {
    let (a, mid, z) = split_at_3(xs, begin, end + 1);
    let width = end - begin;
    let dest = if dest > begin { dest.saturating_sub(width) } else { dest };

    let rest: Vec<T> = a.into_iter().chain(z).collect();
    let (pre, post) = split_at(&rest, dest);

    pre.into_iter().chain(mid).chain(post).collect()
}

/// Removes duplicates while keeping the first occurrence of each item in
/// place.
pub fn uniq<T: Clone + Eq + Hash>(xs: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut used = HashSet::new();
    xs.into_iter().filter(|x| used.insert(x.clone())).collect()
}
