use crate::lex::Token;
use oslc_query_model::ComparisonOperator;

/// Tokenizes an OSLC query parameter string.
///
/// Single pass, O(n). Never fails: characters that fit no token class are
/// skipped and an unterminated quoted string takes the remainder of the
/// input as its body.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(ch) = self.current() {
            if ch.is_whitespace() {
                self.pos += 1;
                continue;
            }
            match ch {
                '{' => self.push_single(Token::LBrace),
                '}' => self.push_single(Token::RBrace),
                '[' => self.push_single(Token::LBracket),
                ']' => self.push_single(Token::RBracket),
                ',' => self.push_single(Token::Comma),
                '"' => self.lex_quoted_string(),
                '<' => {
                    // A `<` starts a URI only if the bracketed run contains
                    // `:` or `/`; a bare `<` or `<=` is a comparison.
                    if !self.try_lex_uri() {
                        if self.peek_next() == Some('=') {
                            self.push_double(Token::Operator(ComparisonOperator::Le));
                        } else {
                            self.push_single(Token::Operator(ComparisonOperator::Lt));
                        }
                    }
                }
                '>' => {
                    if self.peek_next() == Some('=') {
                        self.push_double(Token::Operator(ComparisonOperator::Ge));
                    } else {
                        self.push_single(Token::Operator(ComparisonOperator::Gt));
                    }
                }
                '!' => {
                    if self.peek_next() == Some('=') {
                        self.push_double(Token::Operator(ComparisonOperator::Ne));
                    } else {
                        // Lone `!` fits no token class.
                        self.pos += 1;
                    }
                }
                '=' => self.push_single(Token::Operator(ComparisonOperator::Eq)),
                '*' => self.push_single(Token::Wildcard),
                '+' => self.push_single(Token::Plus),
                '-' => self.push_single(Token::Minus),
                c if is_word_start(c) => self.lex_word(),
                _ => self.pos += 1,
            }
        }
        self.tokens
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn push_single(&mut self, token: Token) {
        self.tokens.push(token);
        self.pos += 1;
    }

    fn push_double(&mut self, token: Token) {
        self.tokens.push(token);
        self.pos += 2;
    }

    /// Copies the string body verbatim, keeping `\`-escaped pairs raw so
    /// that value parsing can resolve them later.
    fn lex_quoted_string(&mut self) {
        self.pos += 1; // opening quote
        let mut content = String::new();
        while let Some(ch) = self.current() {
            if ch == '"' {
                self.pos += 1; // closing quote
                break;
            }
            if ch == '\\' && self.peek_next().is_some() {
                content.push(ch);
                content.push(self.chars[self.pos + 1]);
                self.pos += 2;
            } else {
                content.push(ch);
                self.pos += 1;
            }
        }
        self.tokens.push(Token::QuotedString(content));
    }

    /// Attempts to lex `<...>` as a URI. Returns false without consuming
    /// anything when the candidate is not URI-shaped, so the caller can
    /// treat `<` as an operator.
    fn try_lex_uri(&mut self) -> bool {
        let mut end = self.pos + 1;
        while end < self.chars.len() && self.chars[end] != '>' && !self.chars[end].is_whitespace() {
            end += 1;
        }
        if end >= self.chars.len() || self.chars[end] != '>' {
            return false;
        }
        let content: String = self.chars[self.pos + 1..end].iter().collect();
        if !content.contains(':') && !content.contains('/') {
            return false;
        }
        self.tokens.push(Token::Uri(content));
        self.pos = end + 1;
        true
    }

    fn lex_word(&mut self) {
        let mut word = String::new();
        while let Some(ch) = self.current() {
            if !is_word_part(ch) {
                break;
            }
            word.push(ch);
            self.pos += 1;
        }
        self.tokens.push(Token::Word(word));
    }
}

fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_word_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | ':' | '.' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_and_word_tokens() {
        let tokens = tokenize("dcterms:title in [1, 2]");
        assert_eq!(
            tokens,
            vec![
                Token::Word("dcterms:title".into()),
                Token::Word("in".into()),
                Token::LBracket,
                Token::Word("1".into()),
                Token::Comma,
                Token::Word("2".into()),
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn quoted_string_keeps_raw_escapes() {
        let tokens = tokenize(r#"dcterms:title="she said \"hi\"""#);
        assert_eq!(
            tokens,
            vec![
                Token::Word("dcterms:title".into()),
                Token::Operator(ComparisonOperator::Eq),
                Token::QuotedString(r#"she said \"hi\""#.into()),
            ]
        );
    }

    #[test]
    fn unterminated_string_takes_remainder() {
        let tokens = tokenize(r#"a="oops"#);
        assert_eq!(
            tokens,
            vec![
                Token::Word("a".into()),
                Token::Operator(ComparisonOperator::Eq),
                Token::QuotedString("oops".into()),
            ]
        );
    }

    #[test]
    fn bracketed_uri_vs_less_than() {
        let tokens = tokenize("prop=<http://example.org/x>");
        assert_eq!(
            tokens,
            vec![
                Token::Word("prop".into()),
                Token::Operator(ComparisonOperator::Eq),
                Token::Uri("http://example.org/x".into()),
            ]
        );

        // `<x>` has neither `:` nor `/`, so `<` is an operator.
        let tokens = tokenize("a<5");
        assert_eq!(
            tokens,
            vec![
                Token::Word("a".into()),
                Token::Operator(ComparisonOperator::Lt),
                Token::Word("5".into()),
            ]
        );
    }

    #[test]
    fn multi_char_operators_win_over_single() {
        let tokens = tokenize("a<=1 and b>=2 and c!=3");
        assert_eq!(tokens[1], Token::Operator(ComparisonOperator::Le));
        assert_eq!(tokens[5], Token::Operator(ComparisonOperator::Ge));
        assert_eq!(tokens[9], Token::Operator(ComparisonOperator::Ne));
    }

    #[test]
    fn order_by_signs() {
        let tokens = tokenize("+dcterms:created,-oslc_cm:severity");
        assert_eq!(
            tokens,
            vec![
                Token::Plus,
                Token::Word("dcterms:created".into()),
                Token::Comma,
                Token::Minus,
                Token::Word("oslc_cm:severity".into()),
            ]
        );
    }

    #[test]
    fn unknown_characters_are_skipped() {
        assert_eq!(tokenize("a = ; 1"), tokenize("a = 1"));
        assert_eq!(tokenize(""), Vec::<Token>::new());
        assert_eq!(tokenize("   \t\n"), Vec::<Token>::new());
    }

    #[test]
    fn tokenizing_is_deterministic() {
        let input = r#"dcterms:title="Bug 1" and severity{oslc:level>=3 or x=<urn:x>}"#;
        assert_eq!(tokenize(input), tokenize(input));
    }
}
