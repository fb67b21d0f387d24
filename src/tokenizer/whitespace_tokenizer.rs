/// Splits text on whitespace, with each token keeping its trailing
/// whitespace. Leading whitespace of the text stays on the first token and
/// text made only of whitespace becomes a single token.
///
/// A token not ending in whitespace (which can only be the last one) gets a
/// space appended, so the result only reproduces the input when it ends in
/// whitespace.
///
/// ## Example
///
/// ```not_rust
/// " apa  bepa\ncepa" -> [" apa  ", "bepa\n", "cepa "]
/// "   "              -> ["   "]
/// ""                 -> []
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut has_seen_word = false;
    let mut previous_char_is_whitespace = false;

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if has_seen_word && previous_char_is_whitespace && !is_current_char_whitespace {
            result.push(end_with_space(&text[previous_boundary_index..i]));
            previous_boundary_index = i;
        }

        has_seen_word |= !is_current_char_whitespace;
        previous_char_is_whitespace = is_current_char_whitespace;
    }

    result.push(end_with_space(&text[previous_boundary_index..]));

    result
}

/// Appends a space unless the text is empty or already ends in whitespace.
pub fn end_with_space(text: &str) -> String {
    match text.chars().last() {
        Some(last) if !last.is_whitespace() => format!("{text} "),
        _ => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_with_snapshots() {
        assert_debug_snapshot!(tokenize(" apa  bepa\ncepa"), @r#"
        [
            " apa  ",
            "bepa\n",
            "cepa ",
        ]
        "#);

        assert_debug_snapshot!(tokenize(""), @"[]");

        assert_debug_snapshot!(tokenize(" \n "), @r#"
        [
            " \n ",
        ]
        "#);
    }

    #[test_case("test graph hello", &["test ", "graph ", "hello "])]
    #[test_case("w1 w2", &["w1 ", "w2 "])]
    #[test_case("a bc d ", &["a ", "bc ", "d "])]
    #[test_case("hello  !", &["hello  ", "! "])]
    #[test_case("  hello ", &["  hello "])]
    #[test_case("x", &["x "])]
    fn test_tokenize(text: &str, expected: &[&str]) {
        assert_eq!(tokenize(text), expected);
    }

    #[test]
    fn test_end_with_space() {
        assert_eq!(end_with_space(""), "");
        assert_eq!(end_with_space("apa"), "apa ");
        assert_eq!(end_with_space("apa "), "apa ");
        assert_eq!(end_with_space("apa\n"), "apa\n");
    }
}
