//! Assembles all `oslc.*` parameters into one [`OslcQuery`].

use crate::{parse_order_by, parse_prefixes, parse_search_terms, parse_select, parse_where};
use crate::ParseError;
use oslc_query_model::OslcQuery;
use std::collections::HashMap;

pub const PARAM_PREFIX: &str = "oslc.prefix";
pub const PARAM_WHERE: &str = "oslc.where";
pub const PARAM_SELECT: &str = "oslc.select";
pub const PARAM_ORDER_BY: &str = "oslc.orderBy";
pub const PARAM_SEARCH_TERMS: &str = "oslc.searchTerms";
pub const PARAM_PAGE_SIZE: &str = "oslc.pageSize";
pub const PARAM_PAGE: &str = "oslc.page";

/// The query-string keys this parser reads. Anything else is ignored.
pub const RECOGNIZED_PARAMETERS: &[&str] = &[
    PARAM_PREFIX,
    PARAM_WHERE,
    PARAM_SELECT,
    PARAM_ORDER_BY,
    PARAM_SEARCH_TERMS,
    PARAM_PAGE_SIZE,
    PARAM_PAGE,
];

/// Parses the recognized `oslc.*` query parameters into an [`OslcQuery`].
///
/// Absent parameters leave the corresponding field `None`, never an empty
/// default, so that callers can distinguish "not requested" from
/// "requested but empty". Unrecognized keys are ignored.
pub fn parse_oslc_query(params: &HashMap<String, String>) -> Result<OslcQuery, ParseError> {
    let mut query = OslcQuery::default();

    if let Some(value) = non_empty(params, PARAM_PREFIX) {
        query.prefixes = parse_prefixes(value)?;
    }
    if let Some(value) = non_empty(params, PARAM_WHERE) {
        query.where_clause = Some(parse_where(value)?);
    }
    if let Some(value) = non_empty(params, PARAM_SELECT) {
        query.select = Some(parse_select(value)?);
    }
    if let Some(value) = non_empty(params, PARAM_ORDER_BY) {
        query.order_by = Some(parse_order_by(value)?);
    }
    if let Some(value) = non_empty(params, PARAM_SEARCH_TERMS) {
        query.search_terms = Some(parse_search_terms(value)?);
    }

    // Paging parameters are validated whenever the key is present, even
    // with an empty value.
    if let Some(value) = params.get(PARAM_PAGE_SIZE) {
        query.page_size = Some(parse_positive_int(PARAM_PAGE_SIZE, value)?);
    }
    if let Some(value) = params.get(PARAM_PAGE) {
        query.page = Some(parse_positive_int(PARAM_PAGE, value)?);
    }

    Ok(query)
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_positive_int(parameter: &'static str, value: &str) -> Result<u32, ParseError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParseError::InvalidParameter {
            parameter,
            value: value.to_owned(),
        }),
    }
}
