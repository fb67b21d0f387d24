use thiserror::Error;

/// Error type for out-of-range positions handed to graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A token range that is inverted or exceeds the number of tokens
    #[error(
        "Invalid token range: cannot replace tokens {from}..{to} on a side with {length} tokens"
    )]
    InvalidTokenRange {
        /// The first token index of the range
        from: usize,
        /// The token index right after the range
        to: usize,
        /// The number of tokens on the side
        length: usize,
    },

    /// A character range that is inverted or exceeds the text length
    #[error(
        "Invalid character range: cannot replace characters {from}..{to} of a text with \
         {length} characters"
    )]
    InvalidCharacterRange {
        /// The first character offset of the range
        from: usize,
        /// The character offset right after the range
        to: usize,
        /// The number of characters in the text
        length: usize,
    },

    /// A character offset past the end of the text
    #[error("Out of bounds: character offset {offset} in a text with {length} characters")]
    OffsetOutOfBounds {
        /// The requested character offset
        offset: usize,
        /// The number of characters in the text
        length: usize,
    },

    /// A rearrangement of a slice that isn't fully within the target tokens
    #[error(
        "Invalid rearrangement: cannot move tokens {begin}..={end} to {dest} on a side with \
         {length} tokens"
    )]
    InvalidRearrange {
        /// The first token index of the moved slice
        begin: usize,
        /// The last token index of the moved slice (inclusive)
        end: usize,
        /// The destination index
        dest: usize,
        /// The number of target tokens
        length: usize,
    },
}
