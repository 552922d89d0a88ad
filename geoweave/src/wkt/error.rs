use thiserror::Error;

/// Error of WKT parsing.
///
/// Parsing stops at the first error, no partial geometry is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WktError {
    /// A token that cannot appear at this position of the text.
    #[error("unexpected '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        /// Text of the token.
        found: String,
        /// Description of what was allowed instead.
        expected: &'static str,
        /// Byte offset of the token in the input.
        offset: usize,
    },
    /// The text ended before the geometry was complete.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// Description of what was expected.
        expected: &'static str,
    },
    /// A word in the geometry tag position that is not a known geometry tag.
    #[error("unknown geometry tag '{0}'")]
    UnknownTag(String),
    /// A number that is malformed or cannot be represented by the target numeric type.
    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber {
        /// Text of the number.
        text: String,
        /// Byte offset of the number in the input.
        offset: usize,
    },
    /// Geometry collections nested deeper than the reader allows.
    #[error("geometry collections nested deeper than {limit} levels at offset {offset}")]
    NestingTooDeep {
        /// Maximum nesting depth.
        limit: usize,
        /// Byte offset of the collection that exceeds the limit.
        offset: usize,
    },
    /// A character that cannot start any token.
    #[error("invalid character '{character}' at offset {offset}")]
    InvalidCharacter {
        /// The character.
        character: char,
        /// Byte offset of the character in the input.
        offset: usize,
    },
}

impl WktError {
    /// Moves the offset of the error by `by` bytes, for errors found in a slice of a larger text.
    pub(crate) fn shifted(self, by: usize) -> Self {
        match self {
            Self::UnexpectedToken {
                found,
                expected,
                offset,
            } => Self::UnexpectedToken {
                found,
                expected,
                offset: offset + by,
            },
            Self::InvalidNumber { text, offset } => Self::InvalidNumber {
                text,
                offset: offset + by,
            },
            Self::NestingTooDeep { limit, offset } => Self::NestingTooDeep {
                limit,
                offset: offset + by,
            },
            Self::InvalidCharacter { character, offset } => Self::InvalidCharacter {
                character,
                offset: offset + by,
            },
            error @ (Self::UnexpectedEnd { .. } | Self::UnknownTag(_)) => error,
        }
    }
}
