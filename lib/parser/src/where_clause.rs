//! Parser for the `oslc.where` parameter.
//!
//! Grammar:
//!
//! ```text
//! compound := term (('and'|'or') term)*
//! term     := property ( '{' compound '}'
//!                      | 'in' '[' value (',' value)* ']'
//!                      | cmp-op value )
//! value    := quoted-string | bracketed-uri | 'true' | 'false' | number
//!           | bare-word (a resource reference)
//! ```
//!
//! All operands of one compound must use the same connective; mixing `and`
//! and `or` at a single nesting level without braces is ambiguous and
//! rejected.

use crate::lex::{tokenize, unescape_string, Token};
use crate::stream::TokenStream;
use crate::ParseError;
use oslc_query_model::{LogicalOperator, OslcValue, WhereExpression};

/// Parses an `oslc.where` value into a [`WhereExpression`].
pub fn parse_where(input: &str) -> Result<WhereExpression, ParseError> {
    let mut stream = TokenStream::new(tokenize(input));
    let expression = parse_compound(&mut stream)?;
    if let Some(trailing) = stream.peek() {
        return Err(ParseError::TrailingTokens(trailing.to_string()));
    }
    Ok(expression)
}

fn parse_compound(stream: &mut TokenStream) -> Result<WhereExpression, ParseError> {
    let first = parse_term(stream)?;
    let mut operator: Option<LogicalOperator> = None;
    let mut operands = Vec::new();

    while let Some(token) = stream.peek() {
        let connective = match token.as_word() {
            Some("and") => LogicalOperator::And,
            Some("or") => LogicalOperator::Or,
            _ => break,
        };
        if operator.is_some_and(|op| op != connective) {
            return Err(ParseError::MixedLogicalOperators);
        }
        operator = Some(connective);
        stream.next()?;
        if operands.is_empty() {
            // First connective seen; only now does this become a compound.
            operands.push(first.clone());
        }
        operands.push(parse_term(stream)?);
    }

    match operator {
        None => Ok(first),
        Some(operator) => Ok(WhereExpression::Compound { operator, operands }),
    }
}

fn parse_term(stream: &mut TokenStream) -> Result<WhereExpression, ParseError> {
    let property = stream.consume_property()?;

    // Nested: property { compound }
    if stream.try_consume(&Token::LBrace) {
        let inner = parse_compound(stream)?;
        stream.expect(&Token::RBrace)?;
        return Ok(WhereExpression::Nested {
            property,
            inner: Box::new(inner),
        });
    }

    // Set membership: property in [ value, ... ]
    if stream.matches_word("in") {
        stream.next()?;
        stream.expect(&Token::LBracket)?;
        let mut values = Vec::new();
        if !stream.matches(&Token::RBracket) {
            values.push(parse_value(stream)?);
            while stream.try_consume(&Token::Comma) {
                values.push(parse_value(stream)?);
            }
        }
        stream.expect(&Token::RBracket)?;
        return Ok(WhereExpression::In { property, values });
    }

    // Comparison: property op value
    let token = stream.next()?;
    let Token::Operator(operator) = token else {
        return Err(ParseError::ExpectedComparisonOperator(token.to_string()));
    };
    let value = parse_value(stream)?;
    Ok(WhereExpression::Comparison {
        property,
        operator,
        value,
    })
}

pub(crate) fn parse_value(stream: &mut TokenStream) -> Result<OslcValue, ParseError> {
    match stream.next()? {
        Token::QuotedString(raw) => Ok(OslcValue::String(unescape_string(&raw))),
        Token::Uri(uri) => Ok(OslcValue::Uri(uri)),
        Token::Word(word) => Ok(match word.as_str() {
            "true" => OslcValue::Boolean(true),
            "false" => OslcValue::Boolean(false),
            _ if is_numeral(&word) => OslcValue::Number(word),
            // An unquoted, unbracketed word is a resource reference in
            // prefixed-name form, per OSLC Query Syntax.
            _ => OslcValue::Uri(word),
        }),
        other => Err(ParseError::ExpectedValue(other.to_string())),
    }
}

/// Integer or decimal numeral: `-?\d+(\.\d+)?`.
fn is_numeral(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslc_query_model::ComparisonOperator;

    #[test]
    fn simple_comparison() {
        let expr = parse_where(r#"dcterms:title="Bug 1""#).unwrap();
        assert_eq!(
            expr,
            WhereExpression::Comparison {
                property: "dcterms:title".into(),
                operator: ComparisonOperator::Eq,
                value: OslcValue::String("Bug 1".into()),
            }
        );
    }

    #[test]
    fn value_kinds() {
        let cases = [
            ("p=5", OslcValue::Number("5".into())),
            ("p=3.25", OslcValue::Number("3.25".into())),
            ("p=true", OslcValue::Boolean(true)),
            ("p=false", OslcValue::Boolean(false)),
            (
                "p=<http://example.org/x>",
                OslcValue::Uri("http://example.org/x".into()),
            ),
            ("p=oslc_cm:High", OslcValue::Uri("oslc_cm:High".into())),
        ];
        for (input, expected) in cases {
            let expr = parse_where(input).unwrap();
            let WhereExpression::Comparison { value, .. } = expr else {
                panic!("expected a comparison for {input}");
            };
            assert_eq!(value, expected, "input: {input}");
        }
    }

    #[test]
    fn escaped_quotes_in_string_value() {
        let expr = parse_where(r#"a="she said \"hi\"""#).unwrap();
        let WhereExpression::Comparison { value, .. } = expr else {
            panic!("expected a comparison");
        };
        assert_eq!(value, OslcValue::String(r#"she said "hi""#.into()));
    }

    #[test]
    fn conjunction_keeps_operand_order() {
        let expr = parse_where(r#"a="1" and b="2" and c="3""#).unwrap();
        let WhereExpression::Compound { operator, operands } = expr else {
            panic!("expected a compound");
        };
        assert_eq!(operator, LogicalOperator::And);
        assert_eq!(operands.len(), 3);
    }

    #[test]
    fn mixed_connectives_are_rejected() {
        assert_eq!(
            parse_where(r#"a="1" and b="2" or c="3""#),
            Err(ParseError::MixedLogicalOperators)
        );
        assert_eq!(
            parse_where(r#"a="1" or b="2" and c="3""#),
            Err(ParseError::MixedLogicalOperators)
        );
    }

    #[test]
    fn explicit_nesting_resolves_mixing() {
        let expr = parse_where(r#"a="1" and b{x="2" or y="3"}"#).unwrap();
        let WhereExpression::Compound { operator, operands } = expr else {
            panic!("expected a compound");
        };
        assert_eq!(operator, LogicalOperator::And);
        let WhereExpression::Nested { property, inner } = &operands[1] else {
            panic!("expected a nested term");
        };
        assert_eq!(property, "b");
        assert!(matches!(
            **inner,
            WhereExpression::Compound {
                operator: LogicalOperator::Or,
                ..
            }
        ));
    }

    #[test]
    fn in_term() {
        let expr = parse_where(r#"severity in ["high","critical"]"#).unwrap();
        assert_eq!(
            expr,
            WhereExpression::In {
                property: "severity".into(),
                values: vec![
                    OslcValue::String("high".into()),
                    OslcValue::String("critical".into()),
                ],
            }
        );
    }

    #[test]
    fn empty_in_list_is_allowed() {
        let expr = parse_where("severity in []").unwrap();
        assert_eq!(
            expr,
            WhereExpression::In {
                property: "severity".into(),
                values: vec![],
            }
        );
    }

    #[test]
    fn unterminated_in_list_fails() {
        assert_eq!(
            parse_where(r#"severity in ["high""#),
            Err(ParseError::UnexpectedEndOfInput)
        );
    }

    #[test]
    fn missing_operator_fails() {
        assert!(matches!(
            parse_where("dcterms:title"),
            Err(ParseError::UnexpectedEndOfInput)
        ));
        assert!(matches!(
            parse_where(r#"a "1""#),
            Err(ParseError::ExpectedComparisonOperator(_))
        ));
    }

    #[test]
    fn unterminated_nesting_fails() {
        assert!(matches!(
            parse_where(r#"a{b="1""#),
            Err(ParseError::UnexpectedEndOfInput)
        ));
    }

    #[test]
    fn trailing_tokens_fail() {
        assert_eq!(
            parse_where(r#"a="1" b="2""#),
            Err(ParseError::TrailingTokens("b".into()))
        );
    }

    #[test]
    fn parse_is_deterministic() {
        let input = r#"a="1" and b{x="2" or y="3"}"#;
        assert_eq!(parse_where(input), parse_where(input));
    }
}
