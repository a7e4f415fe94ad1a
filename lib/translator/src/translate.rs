use crate::order_by::build_order_by;
use crate::search::translate_search_terms;
use crate::select::translate_select;
use crate::where_clause::translate_where;
use crate::TranslationContext;
use oslc_query_model::vocab::rdf;
use oslc_query_model::{OslcQuery, PrefixMap};

/// Converts a parsed [`OslcQuery`] into a SPARQL CONSTRUCT query string.
///
/// `resource_type` is the URI of the `rdf:type` results are constrained
/// to, supplied by the caller from the matching query capability.
/// `default_prefixes` are merged under (lower priority than) the query's
/// own prefix declarations.
///
/// A wildcard-free, non-empty `oslc.select` produces the
/// selected-properties shape; everything else produces the
/// full-representation shape.
pub fn to_sparql(
    query: &OslcQuery,
    resource_type: &str,
    default_prefixes: Option<&PrefixMap>,
) -> String {
    let mut merged = PrefixMap::new();
    if let Some(defaults) = default_prefixes {
        merged.extend(defaults.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged.extend(query.prefixes.iter().map(|(k, v)| (k.clone(), v.clone())));

    let mut ctx = TranslationContext::new(merged);

    if query.has_property_selection() {
        build_selected_properties_query(query, resource_type, &mut ctx)
    } else {
        build_full_representation_query(query, resource_type, &mut ctx)
    }
}

fn type_triple(resource_type: &str) -> String {
    let type_uri = if resource_type.starts_with('<') {
        resource_type.to_owned()
    } else {
        format!("<{resource_type}>")
    };
    format!("?s {} {type_uri} .", rdf::TYPE)
}

/// ```sparql
/// CONSTRUCT {
///   ?s rdf:type <resourceType> .
///   ?s <prop1> ?v1 .
/// }
/// WHERE {
///   ?s rdf:type <resourceType> .
///   [where conditions]
///   [search terms]
///   OPTIONAL { ?s <prop1> ?v1 . }
/// }
/// ```
///
/// Paging applies at the outer level; there is no subquery boundary here.
fn build_selected_properties_query(
    query: &OslcQuery,
    resource_type: &str,
    ctx: &mut TranslationContext,
) -> String {
    let type_triple = type_triple(resource_type);
    ctx.construct_patterns.push(type_triple.clone());
    ctx.where_patterns.push(type_triple);

    if let Some(where_clause) = &query.where_clause {
        translate_where(where_clause, ctx, "?s");
    }
    if let Some(search_terms) = query.search_terms.as_deref() {
        if !search_terms.is_empty() {
            translate_search_terms(search_terms, ctx, "?s");
        }
    }
    if let Some(select) = query.select.as_deref() {
        translate_select(select, ctx, "?s");
    }

    let construct = indent_patterns(&ctx.construct_patterns, "  ");
    let where_block = indent_patterns(&ctx.where_patterns, "  ");

    let mut sparql = format!("CONSTRUCT {{\n{construct}\n}}\nWHERE {{\n{where_block}\n}}");
    if let Some(page_size) = query.page_size {
        sparql.push_str(&format!("\nLIMIT {page_size}"));
        if let Some(page) = query.page {
            sparql.push_str(&format!("\nOFFSET {}", page_offset(page, page_size)));
        }
    }
    sparql
}

/// ```sparql
/// CONSTRUCT { ?s ?p ?o }
/// WHERE {
///   { SELECT ?s WHERE {
///       ?s rdf:type <resourceType> .
///       [where conditions]
///       [search terms]
///     }
///     [ORDER BY ...]
///     [LIMIT/OFFSET]
///   }
///   ?s ?p ?o .
/// }
/// ```
///
/// Ordering and paging go into the inner `SELECT ?s` so LIMIT/OFFSET count
/// distinct resources; paging the outer `?s ?p ?o` pattern directly would
/// truncate mid-resource.
fn build_full_representation_query(
    query: &OslcQuery,
    resource_type: &str,
    ctx: &mut TranslationContext,
) -> String {
    let mut sub_where = vec![type_triple(resource_type)];

    if let Some(where_clause) = &query.where_clause {
        let mut sub_ctx = ctx.child_context();
        translate_where(where_clause, &mut sub_ctx, "?s");
        sub_where.append(&mut sub_ctx.where_patterns);
    }

    if let Some(search_terms) = query.search_terms.as_deref() {
        if !search_terms.is_empty() {
            let mut search_ctx = ctx.child_context();
            translate_search_terms(search_terms, &mut search_ctx, "?s");
            sub_where.append(&mut search_ctx.where_patterns);
        }
    }

    let mut order_by_clause = String::new();
    if let Some(order_by) = query.order_by.as_deref() {
        if !order_by.is_empty() {
            let order_ctx = ctx.child_context();
            let (clause, mut patterns) = build_order_by(order_by, &order_ctx, "?s");
            sub_where.append(&mut patterns);
            order_by_clause = format!("\n    {clause}");
        }
    }

    let mut paging_clause = String::new();
    if let Some(page_size) = query.page_size {
        paging_clause.push_str(&format!("\n    LIMIT {page_size}"));
        if let Some(page) = query.page {
            paging_clause.push_str(&format!("\n    OFFSET {}", page_offset(page, page_size)));
        }
    }

    let sub_where = indent_patterns(&sub_where, "      ");
    let subquery = format!(
        "  {{ SELECT ?s WHERE {{\n{sub_where}\n    }}{order_by_clause}{paging_clause}\n  }}"
    );

    [
        "CONSTRUCT { ?s ?p ?o }",
        "WHERE {",
        &subquery,
        "  ?s ?p ?o .",
        "}",
    ]
    .join("\n")
}

/// Offset of the first result of `page`, widened so that pages near the
/// `u32` range cannot overflow the multiplication.
fn page_offset(page: u32, page_size: u32) -> u64 {
    (u64::from(page) - 1) * u64::from(page_size)
}

fn indent_patterns(patterns: &[String], indent: &str) -> String {
    patterns
        .iter()
        .map(|p| format!("{indent}{p}"))
        .collect::<Vec<_>>()
        .join("\n")
}
