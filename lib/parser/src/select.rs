//! Parser for the `oslc.select` parameter.

use crate::lex::{tokenize, Token};
use crate::stream::TokenStream;
use crate::ParseError;
use oslc_query_model::SelectTerm;

/// Parses an `oslc.select` value such as `prop1,prop2{nested1,nested2},*`
/// into a list of [`SelectTerm`]s. Empty input yields an empty list.
pub fn parse_select(input: &str) -> Result<Vec<SelectTerm>, ParseError> {
    let mut stream = TokenStream::new(tokenize(input));
    parse_term_list(&mut stream)
}

fn parse_term_list(stream: &mut TokenStream) -> Result<Vec<SelectTerm>, ParseError> {
    let mut terms = Vec::new();
    if !stream.has_more() {
        return Ok(terms);
    }

    terms.push(parse_term(stream)?);
    while stream.try_consume(&Token::Comma) {
        terms.push(parse_term(stream)?);
    }

    Ok(terms)
}

fn parse_term(stream: &mut TokenStream) -> Result<SelectTerm, ParseError> {
    if stream.try_consume(&Token::Wildcard) {
        return Ok(SelectTerm::Wildcard);
    }

    let property = stream.consume_property()?;

    if stream.try_consume(&Token::LBrace) {
        let children = parse_term_list(stream)?;
        stream.expect(&Token::RBrace)?;
        return Ok(SelectTerm::Nested { property, children });
    }

    Ok(SelectTerm::Property(property))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_list() {
        let terms = parse_select("dcterms:title,dcterms:created").unwrap();
        assert_eq!(
            terms,
            vec![
                SelectTerm::Property("dcterms:title".into()),
                SelectTerm::Property("dcterms:created".into()),
            ]
        );
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert_eq!(parse_select("").unwrap(), Vec::<SelectTerm>::new());
    }

    #[test]
    fn nested_terms_recurse() {
        let terms = parse_select("dcterms:creator{foaf:name,foaf:mbox{x:y}}").unwrap();
        assert_eq!(
            terms,
            vec![SelectTerm::Nested {
                property: "dcterms:creator".into(),
                children: vec![
                    SelectTerm::Property("foaf:name".into()),
                    SelectTerm::Nested {
                        property: "foaf:mbox".into(),
                        children: vec![SelectTerm::Property("x:y".into())],
                    },
                ],
            }]
        );
    }

    #[test]
    fn wildcard_anywhere_in_list() {
        let terms = parse_select("dcterms:title,*").unwrap();
        assert_eq!(
            terms,
            vec![
                SelectTerm::Property("dcterms:title".into()),
                SelectTerm::Wildcard,
            ]
        );
        assert!(terms.iter().any(SelectTerm::is_wildcard));
    }

    #[test]
    fn unterminated_group_fails() {
        assert!(matches!(
            parse_select("a{b,c"),
            Err(ParseError::UnexpectedEndOfInput)
        ));
    }
}
