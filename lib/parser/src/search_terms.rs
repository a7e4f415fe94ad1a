//! Parser for the `oslc.searchTerms` parameter.

use crate::lex::{tokenize, unescape_string, Token};
use crate::stream::TokenStream;
use crate::ParseError;

/// Parses an `oslc.searchTerms` value: comma-separated quoted strings, e.g.
/// `"term1","term2"`. Unquoted tokens are tolerated and passed through as
/// literal search strings.
pub fn parse_search_terms(input: &str) -> Result<Vec<String>, ParseError> {
    let mut stream = TokenStream::new(tokenize(input));
    let mut terms = Vec::new();

    if !stream.has_more() {
        return Ok(terms);
    }

    terms.push(parse_term(&mut stream)?);
    while stream.try_consume(&Token::Comma) {
        terms.push(parse_term(&mut stream)?);
    }

    Ok(terms)
}

fn parse_term(stream: &mut TokenStream) -> Result<String, ParseError> {
    Ok(match stream.next()? {
        Token::QuotedString(raw) => unescape_string(&raw),
        other => other.to_string(),
    })
}
