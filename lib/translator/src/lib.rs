//! Translation of parsed OSLC queries into SPARQL CONSTRUCT queries.
//!
//! Two query shapes are produced:
//!
//! 1. **Selected properties** (a wildcard-free `oslc.select` is present):
//!    a CONSTRUCT that returns only the requested properties, bound through
//!    OPTIONAL patterns so that missing properties do not eliminate rows.
//!
//! 2. **Full representation** (no select, or a wildcard): a CONSTRUCT over
//!    `?s ?p ?o` wrapping an inner `SELECT ?s` subquery that filters by
//!    type and where-clause. Ordering and paging are pushed into the
//!    subquery so that LIMIT/OFFSET apply to distinct resources rather
//!    than truncating mid-resource.
//!
//! The translation is a pure function of its inputs: each call builds its
//! own [`TranslationContext`] and variable counter, so nothing is shared
//! across requests.

mod context;
mod order_by;
mod search;
mod select;
mod translate;
mod value;
mod where_clause;

pub use context::TranslationContext;
pub use translate::to_sparql;
