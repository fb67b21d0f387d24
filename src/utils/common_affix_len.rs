/// Length of the longest common prefix of two slices.
///
/// Adapted from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
/// to work on whole slices instead of index ranges.
pub fn common_prefix_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter().zip(new).take_while(|(a, b)| a == b).count()
}

/// Length of the longest common suffix of two slices.
pub fn common_suffix_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    old.iter()
        .rev()
        .zip(new.iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Length of the longest suffix of `old` that is also a prefix of `new`.
///
/// ## Example
///
/// ```not_rust
/// old: [a, b, c, x, x, x]
/// new:          [x, x, x, d, e, f]
/// ```
/// > results in a length of 3
pub fn common_overlap_len<T: PartialEq>(old: &[T], new: &[T]) -> usize {
    let max_possible = old.len().min(new.len());

    (1..=max_possible)
        .rev()
        .find(|&len| old[old.len() - len..] == new[..len])
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(text: &str) -> Vec<char> { text.chars().collect() }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len::<char>(&[], &[]), 0);
        assert_eq!(
            common_prefix_len(&chars("foobarbaz"), &chars("foobarblah")),
            7
        );
        assert_eq!(common_prefix_len(&chars("foobarbaz"), &chars("blablabla")), 0);
        assert_eq!(common_prefix_len(&chars("abc"), &chars("abcdef")), 3);
    }

    #[test]
    fn test_common_suffix_len() {
        assert_eq!(common_suffix_len::<char>(&[], &[]), 0);
        assert_eq!(common_suffix_len(&chars("1234"), &chars("X0001234")), 4);
        assert_eq!(common_suffix_len(&chars("1234"), &chars("Xxxx")), 0);
        assert_eq!(common_suffix_len(&chars("こんにちは"), &chars("ちは")), 2);
    }

    #[test]
    fn test_common_overlap_len() {
        assert_eq!(common_overlap_len(&chars(""), &chars("abcd")), 0);
        assert_eq!(common_overlap_len(&chars("abc"), &chars("abcd")), 3);
        assert_eq!(common_overlap_len(&chars("123456"), &chars("abcd")), 0);
        assert_eq!(common_overlap_len(&chars("123456xxx"), &chars("xxxabcd")), 3);
        assert_eq!(common_overlap_len(&chars("aaa"), &chars("aa")), 2);
    }
}
