use std::fmt::{Display, Formatter};

/// Lexical unit of WKT text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier: a geometry tag, `EMPTY`, `SRID`, a dimension suffix or `NaN`.
    Word(String),
    /// Number without a fraction or exponent that fits into `i64`.
    Integer(i64),
    /// Any other number.
    Float(f64),
    /// One of `( ) , ; =`.
    Punct(char),
    /// Line break. Only produced if line breaks are significant.
    Eol,
    /// End of the input.
    Eof,
}

/// Discriminant of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// [`Token::Word`]
    Word,
    /// [`Token::Integer`]
    Integer,
    /// [`Token::Float`]
    Float,
    /// [`Token::Punct`]
    Punct,
    /// [`Token::Eol`]
    Eol,
    /// [`Token::Eof`]
    Eof,
}

impl Token {
    /// Kind of the token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Word(_) => TokenKind::Word,
            Token::Integer(_) => TokenKind::Integer,
            Token::Float(_) => TokenKind::Float,
            Token::Punct(_) => TokenKind::Punct,
            Token::Eol => TokenKind::Eol,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Returns true if the token is the given punctuation character.
    pub fn is_punct(&self, c: char) -> bool {
        matches!(self, Token::Punct(v) if *v == c)
    }

    /// Returns true if the token is a word equal to `word` ignoring ASCII case.
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Token::Word(v) if v.eq_ignore_ascii_case(word))
    }

    /// Returns true for the tokens that end a geometry text.
    pub fn is_end(&self) -> bool {
        matches!(self, Token::Eol | Token::Eof)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(v) => write!(f, "{v}"),
            Token::Integer(v) => write!(f, "{v}"),
            Token::Float(v) => write!(f, "{v}"),
            Token::Punct(v) => write!(f, "{v}"),
            Token::Eol => write!(f, "<EOL>"),
            Token::Eof => write!(f, "<EOF>"),
        }
    }
}
