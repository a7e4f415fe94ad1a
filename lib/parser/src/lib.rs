//! Parser for the textual OSLC Query Syntax.
//!
//! Turns the `oslc.where`, `oslc.select`, `oslc.orderBy`, `oslc.searchTerms`
//! and `oslc.prefix` query parameters into the AST defined in
//! `oslc-query-model`, following the OASIS OSLC Query v3.0 grammar:
//! <https://docs.oasis-open.org/oslc-core/oslc-query/v3.0/oslc-query-v3.0.html>
//!
//! The parser operates in two phases:
//!
//! 1. **Lex**: a parameter string is tokenized in one left-to-right pass.
//!    The lexer never fails; unknown characters are skipped and unterminated
//!    strings run to end of input.
//! 2. **Parse**: a recursive-descent parser consumes the token stream and
//!    builds the AST. All failures surface as [`ParseError`].

mod error;
pub mod lex;
mod order_by;
mod params;
mod prefix;
mod search_terms;
mod select;
mod stream;
mod where_clause;

pub use error::ParseError;
pub use lex::{tokenize, Token};
pub use order_by::parse_order_by;
pub use params::{parse_oslc_query, RECOGNIZED_PARAMETERS};
pub use prefix::parse_prefixes;
pub use search_terms::parse_search_terms;
pub use select::parse_select;
pub use stream::TokenStream;
pub use where_clause::parse_where;
