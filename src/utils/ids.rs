/// Calculates the next free numeric id given some existing identifiers.
///
/// Every run of ASCII digits anywhere in any of the identifiers counts, so
/// ids with different prefixes share one counter.
///
/// ```
/// use parallel_corpus::next_id;
///
/// assert_eq!(next_id(Vec::<&str>::new()), 0);
/// assert_eq!(next_id(["t1", "t2", "t3"]), 4);
/// assert_eq!(next_id(["u2v5k1", "b3", "a0"]), 6);
/// assert_eq!(next_id(["77j66"]), 78);
/// ```
pub fn next_id<I, S>(ids: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .flat_map(|id| numbers_in(id.as_ref()))
        .max()
        .map_or(0, |max| max + 1)
}

fn numbers_in(id: &str) -> Vec<usize> {
    id.split(|c: char| !c.is_ascii_digit())
        .filter(|digits| !digits.is_empty())
        .filter_map(|digits| digits.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(&[], 0 ; "empty")]
    #[test_case(&["t1", "t2", "t3"], 4 ; "sequential")]
    #[test_case(&["u2v5k1", "b3", "a0"], 6 ; "several numbers per id")]
    #[test_case(&["77j66"], 78 ; "largest run wins")]
    #[test_case(&["s0", "t12", "s3"], 13 ; "shared between sides")]
    #[test_case(&["e-s1-t2"], 3 ; "edge ids")]
    #[test_case(&["abc"], 0 ; "no digits")]
    fn test_next_id(ids: &[&str], expected: usize) {
        assert_eq!(next_id(ids), expected);
    }
}
