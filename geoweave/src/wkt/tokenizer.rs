use serde::{Deserialize, Serialize};

use super::error::WktError;
use super::token::Token;

/// Options of the [`Tokenizer`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerOptions {
    /// If set, line breaks produce [`Token::Eol`] instead of being skipped as whitespace.
    ///
    /// A geometry cannot span several lines then. [`WktReader::read`](super::WktReader::read)
    /// still accepts only one geometry followed by line breaks, use
    /// [`WktReader::read_lines`](super::WktReader::read_lines) to read one geometry per line.
    pub eol_significant: bool,
}

/// Splits WKT text into [`Token`]s.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    position: usize,
    options: TokenizerOptions,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer with default options.
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, TokenizerOptions::default())
    }

    /// Creates a tokenizer with the given options.
    pub fn with_options(text: &'a str, options: TokenizerOptions) -> Self {
        Self {
            text,
            position: 0,
            options,
        }
    }

    /// Byte offset of the first character not consumed yet.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reads the next token and its byte offset. After the end of input returns [`Token::Eof`]
    /// on every call.
    pub fn next_token(&mut self) -> Result<(usize, Token), WktError> {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek() else {
            return Ok((start, Token::Eof));
        };

        let token = match c {
            '\n' => {
                self.position += 1;
                Token::Eol
            }
            '(' | ')' | ',' | ';' | '=' => {
                self.position += 1;
                Token::Punct(c)
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let len = self.rest().find(|c: char| !is_word_char(c)).unwrap_or(self.rest().len());
                self.position += len;
                Token::Word(self.text[start..self.position].to_string())
            }
            c if c.is_ascii_digit() || c == '+' || c == '-' || c == '.' => self.read_number(start)?,
            character => {
                return Err(WktError::InvalidCharacter {
                    character,
                    offset: start,
                })
            }
        };

        Ok((start, token))
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() || (c == '\n' && self.options.eol_significant) {
                break;
            }

            self.position += c.len_utf8();
        }
    }

    fn skip_digits(&mut self) -> usize {
        let count = self
            .rest()
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest().len());
        self.position += count;
        count
    }

    fn read_number(&mut self, start: usize) -> Result<Token, WktError> {
        if matches!(self.peek(), Some('+' | '-')) {
            self.position += 1;
        }

        // Signed `inf`, `infinity` or `nan`.
        if self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            let len = self.rest().find(|c: char| !is_word_char(c)).unwrap_or(self.rest().len());
            self.position += len;
            let text = &self.text[start..self.position];
            return text.parse::<f64>().map(Token::Float).map_err(|_| WktError::InvalidNumber {
                text: text.to_string(),
                offset: start,
            });
        }

        let mut digits = self.skip_digits();
        let mut is_float = false;

        if self.peek() == Some('.') {
            self.position += 1;
            digits += self.skip_digits();
            is_float = true;
        }

        if digits > 0 && matches!(self.peek(), Some('e' | 'E')) {
            let mantissa_end = self.position;
            self.position += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.position += 1;
            }

            if self.skip_digits() > 0 {
                is_float = true;
            } else {
                // Not an exponent, the letter starts the next token.
                self.position = mantissa_end;
            }
        }

        let text = &self.text[start..self.position];
        let invalid = || WktError::InvalidNumber {
            text: text.to_string(),
            offset: start,
        };

        if digits == 0 {
            return Err(invalid());
        }

        if !is_float {
            if let Ok(v) = text.parse::<i64>() {
                return Ok(Token::Integer(v));
            }
        }

        text.parse::<f64>().map(Token::Float).map_err(|_| invalid())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Forward-only cursor over the tokens of a text.
///
/// The stream is always positioned at some token: [`TokenStream::current`] never fails and
/// [`TokenStream::move_next`] reports lexical errors.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    offset: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream positioned at the first token of the tokenizer input.
    pub fn new(mut tokenizer: Tokenizer<'a>) -> Result<Self, WktError> {
        let (offset, current) = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            current,
            offset,
        })
    }

    /// Token the stream is positioned at.
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Byte offset of the current token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advances to the next token.
    pub fn move_next(&mut self) -> Result<(), WktError> {
        let (offset, token) = self.tokenizer.next_token()?;
        self.offset = offset;
        self.current = token;
        Ok(())
    }
}
