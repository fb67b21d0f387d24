//! Diff of two sequences following the structure of diff-match-patch's
//! `diff_main`.
//!
//! Common prefixes and suffixes are trimmed first. The remaining middle is
//! handled by the first applicable strategy: one side is empty, the shorter
//! side is contained in the longer one, the shorter side is a single item,
//! both sides share a run at least half as long as the longer side, and
//! finally Myers' bisection.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing the bisection.
//!
//! Unlike diff-match-patch, there's no deadline and no line-level speedup:
//! the result only depends on the inputs.

use std::ops::{Index, IndexMut};

use crate::{
    diffs::{cleanup_merge::cleanup_merge, raw_operation::RawOperation},
    utils::common_affix_len::{common_prefix_len, common_suffix_len},
};

/// Diff `old` and `new`, returning a normalised list of operations that
/// transforms `old` into `new`.
pub fn diff_main<T>(old: &[T], new: &[T]) -> Vec<RawOperation<T>>
where
    T: PartialEq + Clone,
{
    if old == new {
        return if old.is_empty() {
            Vec::new()
        } else {
            vec![RawOperation::equal(old)]
        };
    }

    let prefix_len = common_prefix_len(old, new);
    let suffix_len = common_suffix_len(&old[prefix_len..], &new[prefix_len..]);

    let mut result = Vec::new();
    if prefix_len > 0 {
        result.push(RawOperation::equal(&old[..prefix_len]));
    }

    result.extend(compute(
        &old[prefix_len..old.len() - suffix_len],
        &new[prefix_len..new.len() - suffix_len],
    ));

    if suffix_len > 0 {
        result.push(RawOperation::equal(&old[old.len() - suffix_len..]));
    }

    cleanup_merge(&mut result);

    result
}

/// Diff two sequences that share neither a common prefix nor a common suffix.
fn compute<T>(old: &[T], new: &[T]) -> Vec<RawOperation<T>>
where
    T: PartialEq + Clone,
{
    if old.is_empty() {
        return vec![RawOperation::insert(new)];
    }

    if new.is_empty() {
        return vec![RawOperation::delete(old)];
    }

    let old_is_longer = old.len() > new.len();
    let (long, short) = if old_is_longer { (old, new) } else { (new, old) };

    if let Some(i) = find(long, short, 0) {
        let edit: fn(&[T]) -> RawOperation<T> = if old_is_longer {
            RawOperation::delete
        } else {
            RawOperation::insert
        };

        return [
            edit(&long[..i]),
            RawOperation::equal(short),
            edit(&long[i + short.len()..]),
        ]
        .into_iter()
        .filter(|operation| !operation.is_empty())
        .collect();
    }

    if short.len() == 1 {
        // After the containment check, a single item can't be equal
        return vec![RawOperation::delete(old), RawOperation::insert(new)];
    }

    if let Some(half) = half_match(old, new) {
        let mut result = diff_main(half.old_prefix, half.new_prefix);
        result.push(RawOperation::equal(half.common));
        result.extend(diff_main(half.old_suffix, half.new_suffix));
        return result;
    }

    bisect(old, new)
}

/// Index of the first occurrence of `needle` in `haystack` at or after
/// `from`.
fn find<T: PartialEq>(haystack: &[T], needle: &[T], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(haystack.len()));
    }

    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| i + from)
}

/// Both sequences split around a run they have in common.
#[derive(Debug)]
struct HalfMatch<'a, T> {
    old_prefix: &'a [T],
    old_suffix: &'a [T],
    new_prefix: &'a [T],
    new_suffix: &'a [T],
    common: &'a [T],
}

impl<T> HalfMatch<'_, T> {
    fn swapped(self) -> Self {
        Self {
            old_prefix: self.new_prefix,
            old_suffix: self.new_suffix,
            new_prefix: self.old_prefix,
            new_suffix: self.old_suffix,
            common: self.common,
        }
    }
}

/// Looks for a run shared by both sides that is at least half as long as the
/// longer side. This is a speedup that can produce non-minimal diffs.
fn half_match<'a, T: PartialEq>(old: &'a [T], new: &'a [T]) -> Option<HalfMatch<'a, T>> {
    let old_is_longer = old.len() > new.len();
    let (long, short) = if old_is_longer { (old, new) } else { (new, old) };

    if long.len() < 4 || short.len() * 2 < long.len() {
        return None;
    }

    // Seed from the second and the third quarter of the longer side
    let first = half_match_at(long, short, long.len().div_ceil(4));
    let second = half_match_at(long, short, long.len().div_ceil(2));

    let best = match (first, second) {
        (None, None) => return None,
        (Some(found), None) | (None, Some(found)) => found,
        (Some(first), Some(second)) => {
            if first.common.len() > second.common.len() {
                first
            } else {
                second
            }
        }
    };

    Some(if old_is_longer { best } else { best.swapped() })
}

/// The returned `HalfMatch` refers to `long` as old and `short` as new.
fn half_match_at<'a, T: PartialEq>(
    long: &'a [T],
    short: &'a [T],
    i: usize,
) -> Option<HalfMatch<'a, T>> {
    let seed = &long[i..i + long.len() / 4];

    let mut best: Option<HalfMatch<'a, T>> = None;
    let mut maybe_j = find(short, seed, 0);
    while let Some(j) = maybe_j {
        let prefix_len = common_prefix_len(&long[i..], &short[j..]);
        let suffix_len = common_suffix_len(&long[..i], &short[..j]);

        if best
            .as_ref()
            .is_none_or(|best| best.common.len() < prefix_len + suffix_len)
        {
            best = Some(HalfMatch {
                old_prefix: &long[..i - suffix_len],
                old_suffix: &long[i + prefix_len..],
                new_prefix: &short[..j - suffix_len],
                new_suffix: &short[j + prefix_len..],
                common: &short[j - suffix_len..j + prefix_len],
            });
        }

        maybe_j = find(short, seed, j + 1);
    }

    best.filter(|best| best.common.len() * 2 >= long.len())
}

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`. `-1` marks diagonals that
/// haven't been reached yet.
///
/// `V` is indexed by `k` which can be negative, so it's represented as a
/// light-weight wrapper around a Vec plus an `offset`.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<isize>,
}

impl V {
    fn new(max_d: isize) -> Self {
        Self {
            offset: max_d,
            v: vec![-1; to_usize(2 * max_d)],
        }
    }

    fn contains(&self, k: isize) -> bool { (-self.offset..self.offset).contains(&k) }
}

impl Index<isize> for V {
    type Output = isize;

    fn index(&self, k: isize) -> &Self::Output {
        let idx = to_usize(k + self.offset);
        &self.v[idx.min(self.v.len().saturating_sub(1))]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let idx = to_usize(k + self.offset);
        let len = self.v.len();
        &mut self.v[idx.min(len.saturating_sub(1))]
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn to_usize(value: isize) -> usize { usize::try_from(value).unwrap_or(0) }

/// Find the middle snake of an optimal D-path by running the basic algorithm
/// in both the forward and reverse directions until the furthest reaching
/// paths meet, then diff the two halves separately.
fn bisect<T>(old: &[T], new: &[T]) -> Vec<RawOperation<T>>
where
    T: PartialEq + Clone,
{
    let n = to_isize(old.len());
    let m = to_isize(new.len());

    let max_d = (n + m + 1) / 2;
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    vf[1] = 0;
    vb[1] = 0;

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = n - m;
    let front = delta % 2 != 0;

    // Offsets for the start and end of the k loops, they prevent mapping
    // points outside the edit grid.
    let (mut k1_start, mut k1_end, mut k2_start, mut k2_end) = (0, 0, 0, 0);

    for d in 0..max_d {
        // Forward path
        let mut k1 = -d + k1_start;
        while k1 <= d - k1_end {
            let mut x1 = if k1 == -d || (k1 != d && vf[k1 - 1] < vf[k1 + 1]) {
                vf[k1 + 1]
            } else {
                vf[k1 - 1] + 1
            };
            let mut y1 = x1 - k1;

            while x1 < n && y1 < m && old[to_usize(x1)] == new[to_usize(y1)] {
                x1 += 1;
                y1 += 1;
            }

            vf[k1] = x1;

            if x1 > n {
                // Ran off the right of the graph
                k1_end += 2;
            } else if y1 > m {
                // Ran off the bottom of the graph
                k1_start += 2;
            } else if front {
                let k2 = delta - k1;
                if vb.contains(k2) && vb[k2] != -1 && x1 >= n - vb[k2] {
                    return bisect_split(old, new, to_usize(x1), to_usize(y1));
                }
            }

            k1 += 2;
        }

        // Reverse path
        let mut k2 = -d + k2_start;
        while k2 <= d - k2_end {
            let mut x2 = if k2 == -d || (k2 != d && vb[k2 - 1] < vb[k2 + 1]) {
                vb[k2 + 1]
            } else {
                vb[k2 - 1] + 1
            };
            let mut y2 = x2 - k2;

            while x2 < n
                && y2 < m
                && old[to_usize(n - x2 - 1)] == new[to_usize(m - y2 - 1)]
            {
                x2 += 1;
                y2 += 1;
            }

            vb[k2] = x2;

            if x2 > n {
                k2_end += 2;
            } else if y2 > m {
                k2_start += 2;
            } else if !front {
                let k1 = delta - k2;
                if vf.contains(k1) && vf[k1] != -1 {
                    let x1 = vf[k1];
                    let y1 = x1 - k1;
                    if x1 >= n - x2 {
                        return bisect_split(old, new, to_usize(x1), to_usize(y1));
                    }
                }
            }

            k2 += 2;
        }
    }

    // The number of edits equals the number of items, so nothing is common
    vec![RawOperation::delete(old), RawOperation::insert(new)]
}

fn bisect_split<T>(old: &[T], new: &[T], x: usize, y: usize) -> Vec<RawOperation<T>>
where
    T: PartialEq + Clone,
{
    let mut result = diff_main(&old[..x], &new[..y]);
    result.extend(diff_main(&old[x..], &new[y..]));
    result
}
