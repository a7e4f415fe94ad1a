/// An error raised while parsing OSLC query parameters.
///
/// The embedding HTTP layer is expected to map this to a 400 response with
/// the message as payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("expected '{expected}' but got '{found}'")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected token '{0}' after where expression")]
    TrailingTokens(String),
    #[error("cannot mix 'and' and 'or' at the same nesting level; use nested braces to clarify precedence")]
    MixedLogicalOperators,
    #[error("expected a property name but got '{0}'")]
    ExpectedProperty(String),
    #[error("expected comparison operator but got '{0}'")]
    ExpectedComparisonOperator(String),
    #[error("expected a value but got '{0}'")]
    ExpectedValue(String),
    #[error("invalid prefix declaration '{0}': missing '='")]
    PrefixMissingEquals(String),
    #[error("invalid prefix declaration '{0}': empty prefix name")]
    EmptyPrefixName(String),
    #[error("invalid value for '{parameter}': '{value}' (expected a positive integer)")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
    },
}
