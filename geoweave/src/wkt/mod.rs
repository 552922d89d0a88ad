//! Reading and writing of Well-Known Text.
//!
//! [`WktReader`] is a recursive descent parser over the [`TokenStream`] produced by the
//! [`Tokenizer`]. It accepts the EWKT `SRID=n;` prefix and `Z`/`M`/`ZM` dimension suffixes, but only
//! two dimensions are kept. [`WktWriter`] is its inverse and writes plain 2d WKT.

mod error;
mod reader;
mod token;
mod tokenizer;
mod writer;

pub use error::WktError;
pub use reader::{WktReader, MAX_NESTING_DEPTH};
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenStream, Tokenizer, TokenizerOptions};
pub use writer::WktWriter;
