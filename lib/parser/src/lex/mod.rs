//! Lexical analysis for OSLC query parameter strings.
//!
//! A parameter string is tokenized in a single left-to-right pass. The
//! lexer is deliberately tolerant: unknown characters are dropped and an
//! unterminated quoted string runs to the end of the input. All strictness
//! lives in the parsers.

mod lexer;
mod token;

pub use lexer::tokenize;
pub use token::Token;

pub(crate) use token::unescape_string;
