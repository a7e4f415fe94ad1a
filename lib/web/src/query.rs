use crate::error::OslcQueryServerError;
use crate::AppState;
use anyhow::anyhow;
use axum::extract::{Query, State};
use axum::http::{header, Uri};
use axum::response::{IntoResponse, Response};
use oslc_query::model::vocab::{dcterms, oslc, rdf};
use oslc_query::model::{Graph, LiteralRef, NamedNode, TripleRef};
use oslc_query::storage::StorageError;
use oslc_query::{parse_oslc_query, to_sparql};
use std::collections::HashMap;

pub async fn handle_query_get(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, OslcQueryServerError> {
    let query = parse_oslc_query(&params)?;
    let sparql = to_sparql(&query, &state.resource_type, Some(&state.default_prefixes));
    tracing::debug!(%sparql, "translated OSLC query parameters");

    let outcome = state.executor.construct_query(&sparql).await?;
    if !(200..300).contains(&outcome.status) {
        return Err(StorageError::UnexpectedStatus(outcome.status).into());
    }
    let Some(mut graph) = outcome.results else {
        return Err(OslcQueryServerError::Internal(anyhow!(
            "executor reported success but returned no graph"
        )));
    };

    if query.page_size.is_some() {
        let current_page = query.page.unwrap_or(1);
        add_response_info(&mut graph, &state.app_base, &uri, current_page)?;
    }

    let body = graph
        .iter()
        .map(|triple| format!("{triple} ."))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(([(header::CONTENT_TYPE, "application/n-triples")], body).into_response())
}

/// Marks a paged result graph with an `oslc:ResponseInfo` resource named
/// after the request URI, linking to the next page with all other query
/// parameters preserved.
fn add_response_info(
    graph: &mut Graph,
    app_base: &str,
    uri: &Uri,
    current_page: u32,
) -> Result<(), OslcQueryServerError> {
    let response_info = NamedNode::new(format!("{app_base}{uri}"))
        .map_err(|e| OslcQueryServerError::Internal(anyhow!(e)))?;
    let next_page = NamedNode::new(format!(
        "{}{}?{}",
        app_base,
        uri.path(),
        next_page_query(uri.query(), current_page.saturating_add(1))
    ))
    .map_err(|e| OslcQueryServerError::Internal(anyhow!(e)))?;

    graph.insert(TripleRef::new(
        response_info.as_ref(),
        rdf::TYPE,
        oslc::RESPONSE_INFO,
    ));
    graph.insert(TripleRef::new(
        response_info.as_ref(),
        dcterms::TITLE,
        LiteralRef::new_simple_literal("Query Results"),
    ));
    graph.insert(TripleRef::new(
        response_info.as_ref(),
        oslc::NEXT_PAGE,
        next_page.as_ref(),
    ));
    Ok(())
}

/// Rebuilds the raw query string with `oslc.page` replaced by `page`. All
/// other pairs keep their original encoding and order.
fn next_page_query(raw: Option<&str>, page: u32) -> String {
    let mut pairs: Vec<String> = raw
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some("oslc.page"))
        .map(str::to_owned)
        .collect();
    pairs.push(format!("oslc.page={page}"));
    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_query_bumps_only_the_page() {
        assert_eq!(
            next_page_query(Some("oslc.pageSize=10&oslc.page=2"), 3),
            "oslc.pageSize=10&oslc.page=3"
        );
        assert_eq!(
            next_page_query(Some("oslc.pageSize=10"), 2),
            "oslc.pageSize=10&oslc.page=2"
        );
        assert_eq!(next_page_query(None, 2), "oslc.page=2");
    }

    #[test]
    fn response_info_links_to_the_next_page() {
        let mut graph = Graph::new();
        let uri: Uri = "/query?oslc.pageSize=10&oslc.page=2".parse().unwrap();
        add_response_info(&mut graph, "http://example.com", &uri, 2).unwrap();

        let response_info =
            NamedNode::new("http://example.com/query?oslc.pageSize=10&oslc.page=2").unwrap();
        assert!(graph.contains(TripleRef::new(
            response_info.as_ref(),
            rdf::TYPE,
            oslc::RESPONSE_INFO,
        )));
        assert!(graph.contains(TripleRef::new(
            response_info.as_ref(),
            dcterms::TITLE,
            LiteralRef::new_simple_literal("Query Results"),
        )));
        let next =
            NamedNode::new("http://example.com/query?oslc.pageSize=10&oslc.page=3").unwrap();
        assert!(graph.contains(TripleRef::new(
            response_info.as_ref(),
            oslc::NEXT_PAGE,
            next.as_ref(),
        )));
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn first_page_defaults_when_no_page_parameter() {
        let mut graph = Graph::new();
        let uri: Uri = "/query?oslc.pageSize=5".parse().unwrap();
        add_response_info(&mut graph, "http://example.com", &uri, 1).unwrap();

        let next = NamedNode::new("http://example.com/query?oslc.pageSize=5&oslc.page=2").unwrap();
        let response_info = NamedNode::new("http://example.com/query?oslc.pageSize=5").unwrap();
        assert!(graph.contains(TripleRef::new(
            response_info.as_ref(),
            oslc::NEXT_PAGE,
            next.as_ref(),
        )));
    }
}
