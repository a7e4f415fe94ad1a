use oslc_query_model::ComparisonOperator;
use std::fmt;

/// A single token of an OSLC query parameter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `"..."` — the content between the quotes, with backslash escapes
    /// still intact. Escapes are only resolved when the token becomes a
    /// value, see `unescape_string`.
    QuotedString(String),
    /// `<...>` — the content between the angle brackets.
    Uri(String),
    /// `=`, `!=`, `<`, `>`, `<=` or `>=`
    Operator(ComparisonOperator),
    /// `*`
    Wildcard,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// A run of `[A-Za-z0-9_:.\-]` starting with `[A-Za-z0-9_]`. Covers
    /// prefixed names such as `dcterms:title`, bare numerals, and the
    /// keywords `and`, `or`, `in`, `true`, `false`.
    Word(String),
}

impl Token {
    /// The word content, if this is a word token.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    /// Renders the token as it appeared in the source, for error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::Comma => f.write_str(","),
            Token::QuotedString(content) => write!(f, "\"{content}\""),
            Token::Uri(uri) => write!(f, "<{uri}>"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Wildcard => f.write_str("*"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Word(word) => f.write_str(word),
        }
    }
}

/// Resolves the backslash escapes of a quoted-string token: `\X` becomes
/// `X` for any `X`. A trailing lone backslash is kept as-is.
pub(crate) fn unescape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
