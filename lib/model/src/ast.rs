use std::fmt;

/// A literal or resource value appearing on the right-hand side of an OSLC
/// query comparison.
///
/// The content is stored unescaped: a [`OslcValue::String`] no longer carries
/// its surrounding quotes and an originally bracketed [`OslcValue::Uri`] no
/// longer carries its angle brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OslcValue {
    /// A quoted string literal.
    String(String),
    /// An integer or decimal numeral, kept verbatim to preserve its lexical
    /// form.
    Number(String),
    /// A boolean literal.
    Boolean(bool),
    /// A resource reference, either a full URI or a `prefix:local` name.
    /// Bare unquoted words are resource references per OSLC Query Syntax.
    Uri(String),
}

/// A comparison operator in an `oslc.where` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl ComparisonOperator {
    /// The SPARQL spelling of this operator. OSLC comparison operators map
    /// directly onto SPARQL FILTER operators.
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Ne => "!=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Ge => ">=",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The boolean connective of a [`WhereExpression::Compound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// A parsed `oslc.where` expression.
#[derive(Debug, Clone, PartialEq)]
pub enum WhereExpression {
    /// `property op value`
    Comparison {
        property: String,
        operator: ComparisonOperator,
        value: OslcValue,
    },
    /// `property in [v1, v2, ...]`
    In {
        property: String,
        values: Vec<OslcValue>,
    },
    /// `property{...}`, with the inner expression scoped to the object
    /// reached via `property`.
    Nested {
        property: String,
        inner: Box<WhereExpression>,
    },
    /// A flat list of operands joined by a single connective. Mixing `and`
    /// and `or` at one nesting level is rejected at parse time, so every
    /// compound has exactly one operator.
    Compound {
        operator: LogicalOperator,
        operands: Vec<WhereExpression>,
    },
}

/// A single term of an `oslc.select` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectTerm {
    /// `property`
    Property(String),
    /// `property{child,child}`
    Nested {
        property: String,
        children: Vec<SelectTerm>,
    },
    /// `*`
    Wildcard,
}

impl SelectTerm {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, SelectTerm::Wildcard)
    }
}

/// Sort direction of an [`OrderByTerm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A single term of an `oslc.orderBy` clause. The direction defaults to
/// ascending when no `+`/`-` sign precedes the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByTerm {
    pub property: String,
    pub direction: SortDirection,
}
