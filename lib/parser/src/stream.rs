//! Token stream for recursive-descent parsing.

use crate::lex::Token;
use crate::ParseError;

/// A cursor over a token sequence with peek/consume/expect primitives.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The current token without consuming it, or `None` at end of input.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes and returns the current token.
    pub fn next(&mut self) -> Result<Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEndOfInput)?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the current token, failing unless it matches `expected`.
    pub fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        let token = self.next()?;
        if token != *expected {
            return Err(ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
            });
        }
        Ok(())
    }

    /// Whether the current token matches `expected`, without consuming.
    pub fn matches(&self, expected: &Token) -> bool {
        self.peek() == Some(expected)
    }

    /// Whether the current token is the given word, without consuming.
    pub fn matches_word(&self, word: &str) -> bool {
        self.peek().and_then(Token::as_word) == Some(word)
    }

    /// Consumes the current token only if it matches, returning whether it
    /// did.
    pub fn try_consume(&mut self, expected: &Token) -> bool {
        if self.matches(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Consumes a property name: a word (prefixed name) or a bracketed URI.
    pub fn consume_property(&mut self) -> Result<String, ParseError> {
        match self.next()? {
            Token::Word(word) => Ok(word),
            Token::Uri(uri) => Ok(uri),
            other => Err(ParseError::ExpectedProperty(other.to_string())),
        }
    }
}
