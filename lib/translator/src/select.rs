use crate::TranslationContext;
use oslc_query_model::SelectTerm;

/// Emits, for each select term, a CONSTRUCT pattern (what to return) and a
/// parallel OPTIONAL WHERE pattern (so a missing property does not
/// eliminate the row). Nested terms recurse with the bound object variable
/// as the new subject.
pub(crate) fn translate_select(
    terms: &[SelectTerm],
    ctx: &mut TranslationContext,
    subject: &str,
) {
    for term in terms {
        match term {
            SelectTerm::Property(property) => {
                let predicate = ctx.resolve_uri(property);
                let var = ctx.fresh_var();
                ctx.construct_patterns
                    .push(format!("{subject} {predicate} {var} ."));
                ctx.where_patterns
                    .push(format!("OPTIONAL {{ {subject} {predicate} {var} . }}"));
            }
            SelectTerm::Nested { property, children } => {
                let predicate = ctx.resolve_uri(property);
                let nested_var = ctx.fresh_var();
                ctx.construct_patterns
                    .push(format!("{subject} {predicate} {nested_var} ."));
                ctx.where_patterns
                    .push(format!("OPTIONAL {{ {subject} {predicate} {nested_var} . }}"));
                translate_select(children, ctx, &nested_var);
            }
            // A top-level wildcard routes the whole query to the
            // full-representation shape before this function is reached.
            // Inside a nested group it binds all properties of the group's
            // subject.
            SelectTerm::Wildcard => {
                let p_var = ctx.fresh_var();
                let o_var = ctx.fresh_var();
                ctx.construct_patterns
                    .push(format!("{subject} {p_var} {o_var} ."));
                ctx.where_patterns
                    .push(format!("OPTIONAL {{ {subject} {p_var} {o_var} . }}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslc_query_model::PrefixMap;

    #[test]
    fn property_emits_construct_and_optional() {
        let mut ctx = TranslationContext::new(PrefixMap::new());
        translate_select(
            &[SelectTerm::Property("dcterms:title".into())],
            &mut ctx,
            "?s",
        );
        assert_eq!(
            ctx.construct_patterns,
            vec!["?s <http://purl.org/dc/terms/title> ?_v0 ."]
        );
        assert_eq!(
            ctx.where_patterns,
            vec!["OPTIONAL { ?s <http://purl.org/dc/terms/title> ?_v0 . }"]
        );
    }

    #[test]
    fn nested_recurses_from_the_object_variable() {
        let mut ctx = TranslationContext::new(PrefixMap::new());
        translate_select(
            &[SelectTerm::Nested {
                property: "dcterms:creator".into(),
                children: vec![SelectTerm::Property("foaf:name".into())],
            }],
            &mut ctx,
            "?s",
        );
        assert_eq!(
            ctx.construct_patterns,
            vec![
                "?s <http://purl.org/dc/terms/creator> ?_v0 .",
                "?_v0 <http://xmlns.com/foaf/0.1/name> ?_v1 .",
            ]
        );
    }

    #[test]
    fn nested_wildcard_binds_fresh_predicate_and_object() {
        let mut ctx = TranslationContext::new(PrefixMap::new());
        translate_select(
            &[SelectTerm::Nested {
                property: "dcterms:creator".into(),
                children: vec![SelectTerm::Wildcard],
            }],
            &mut ctx,
            "?s",
        );
        assert_eq!(ctx.construct_patterns[1], "?_v0 ?_v1 ?_v2 .");
    }
}
