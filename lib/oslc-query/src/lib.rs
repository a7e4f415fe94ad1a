//! OSLC Query Syntax parsing and SPARQL CONSTRUCT translation.
//!
//! The typical flow is one call per HTTP request:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let params: HashMap<String, String> = [
//!     ("oslc.where".to_owned(), r#"dcterms:title="Bug 1""#.to_owned()),
//!     ("oslc.select".to_owned(), "dcterms:title".to_owned()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let sparql =
//!     oslc_query::sparql_for_query_params(&params, "http://example.com/ns#Defect").unwrap();
//! assert!(sparql.starts_with("CONSTRUCT {"));
//! ```

use std::collections::HashMap;

pub mod model {
    pub use oslc_query_model::*;
}

pub mod parser {
    pub use oslc_query_parser::*;
}

pub mod translator {
    pub use oslc_query_translator::*;
}

pub mod storage {
    pub use oslc_query_common::error::StorageError;
    pub use oslc_query_common::{ConstructQueryExecutor, ConstructQueryOutcome};
}

pub use oslc_query_parser::{parse_oslc_query, ParseError};
pub use oslc_query_translator::to_sparql;

/// Parses the `oslc.*` parameters of one request and translates them into
/// a SPARQL CONSTRUCT query against `resource_type` in one call.
pub fn sparql_for_query_params(
    params: &HashMap<String, String>,
    resource_type: &str,
) -> Result<String, ParseError> {
    let query = parse_oslc_query(params)?;
    Ok(to_sparql(&query, resource_type, None))
}
