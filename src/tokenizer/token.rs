#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GraphError;

/// A contiguous fragment of one side's text together with its permanent
/// identifier.
///
/// The text conventionally includes its trailing whitespace so that
/// concatenating the tokens of a side gives back the whole text. Ids are
/// never reused, even after the token has been deleted.
///
/// It's UTF-8 compatible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    id: String,
}

impl Token {
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            id: id.into(),
        }
    }

    pub fn text(&self) -> &str { &self.text }

    pub fn id(&self) -> &str { &self.id }

    pub fn get_length(&self) -> usize { self.text.chars().count() }
}

/// Gives the `i`-th token the id `{prefix}{i}`.
pub fn identify<S: AsRef<str>>(tokens: &[S], prefix: &str) -> Vec<Token> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, text)| Token::new(text.as_ref(), format!("{prefix}{i}")))
        .collect()
}

/// The text spelled out by some tokens.
///
/// ```
/// use parallel_corpus::{identify, text, tokenize};
///
/// assert_eq!(text(&identify(&tokenize("apa bepa cepa "), "#")), "apa bepa cepa ");
/// ```
#[must_use]
pub fn text(tokens: &[Token]) -> String { tokens.iter().map(Token::text).collect() }

/// The texts of some tokens.
#[must_use]
pub fn texts(tokens: &[Token]) -> Vec<&str> { tokens.iter().map(Token::text).collect() }

/// Position of a character within a list of tokens.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAt {
    /// Index of the token containing the character
    pub token: usize,
    /// Offset of the character within that token, in characters
    pub offset: usize,
}

/// Finds the token a character offset falls into.
///
/// The offset right after the last character maps to one past the last token
/// so that appending at the end can be expressed.
///
/// ```not_rust
/// ["012", "3456", "789"], 0  -> { token: 0, offset: 0 }
/// ["012", "3456", "789"], 3  -> { token: 1, offset: 0 }
/// ["012", "3456", "789"], 9  -> { token: 2, offset: 2 }
/// ["012", "3456", "789"], 10 -> { token: 3, offset: 0 }
/// ["012", "3456", "789"], 11 -> out of bounds
/// ```
pub fn token_at<S: AsRef<str>>(tokens: &[S], offset: usize) -> Result<TokenAt, GraphError> {
    let mut passed = 0;
    for (i, token) in tokens.iter().enumerate() {
        let length = token.as_ref().chars().count();
        if passed + length > offset {
            return Ok(TokenAt {
                token: i,
                offset: offset - passed,
            });
        }
        passed += length;
    }

    if offset == passed {
        return Ok(TokenAt {
            token: tokens.len(),
            offset: 0,
        });
    }

    Err(GraphError::OffsetOutOfBounds {
        offset,
        length: passed,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0, 0)]
    #[test_case(2, 0, 2)]
    #[test_case(3, 1, 0)]
    #[test_case(6, 1, 3)]
    #[test_case(7, 2, 0)]
    #[test_case(9, 2, 2)]
    #[test_case(10, 3, 0 ; "one past the end")]
    fn test_token_at(offset: usize, token: usize, offset_within: usize) {
        assert_eq!(
            token_at(&["012", "3456", "789"], offset),
            Ok(TokenAt {
                token,
                offset: offset_within
            })
        );
    }

    #[test]
    fn test_token_at_out_of_bounds() {
        assert_eq!(
            token_at(&["012", "3456", "789"], 11),
            Err(GraphError::OffsetOutOfBounds {
                offset: 11,
                length: 10
            })
        );
        assert_eq!(
            token_at::<&str>(&[], 0),
            Ok(TokenAt {
                token: 0,
                offset: 0
            })
        );
    }

    #[test]
    fn test_token_at_counts_characters() {
        assert_eq!(
            token_at(&["héllo ", "wörld "], 7),
            Ok(TokenAt {
                token: 1,
                offset: 1
            })
        );
    }

    #[test]
    fn test_identify() {
        let tokens = identify(&["apa ", "bepa "], "s");

        assert_eq!(tokens, [Token::new("apa ", "s0"), Token::new("bepa ", "s1")]);
        assert_eq!(texts(&tokens), ["apa ", "bepa "]);
        assert_eq!(text(&tokens), "apa bepa ");
    }
}
