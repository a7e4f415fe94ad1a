//! Parser for the `oslc.orderBy` parameter.

use crate::lex::{tokenize, Token};
use crate::stream::TokenStream;
use crate::ParseError;
use oslc_query_model::{OrderByTerm, SortDirection};

/// Parses an `oslc.orderBy` value such as `+dcterms:created,-severity`.
/// A property without a sign sorts ascending.
pub fn parse_order_by(input: &str) -> Result<Vec<OrderByTerm>, ParseError> {
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

fn parse_term(stream: &mut TokenStream) -> Result<OrderByTerm, ParseError> {
    let direction = if stream.try_consume(&Token::Plus) {
        SortDirection::Ascending
    } else if stream.try_consume(&Token::Minus) {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    let property = stream.consume_property()?;
    Ok(OrderByTerm {
        property,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_and_default_direction() {
        let terms = parse_order_by("+a:x,-b:y,c:z").unwrap();
        assert_eq!(
            terms,
            vec![
                OrderByTerm {
                    property: "a:x".into(),
                    direction: SortDirection::Ascending,
                },
                OrderByTerm {
                    property: "b:y".into(),
                    direction: SortDirection::Descending,
                },
                OrderByTerm {
                    property: "c:z".into(),
                    direction: SortDirection::Ascending,
                },
            ]
        );
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert_eq!(parse_order_by("").unwrap(), Vec::<OrderByTerm>::new());
    }

    #[test]
    fn sign_without_property_fails() {
        assert!(matches!(
            parse_order_by("-"),
            Err(ParseError::UnexpectedEndOfInput)
        ));
    }
}
