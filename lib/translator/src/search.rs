use crate::value::escape_sparql_string;
use crate::TranslationContext;

/// Emits, per search term, a triple pattern against an unconstrained
/// predicate plus a case-insensitive substring filter over the bound
/// value.
pub(crate) fn translate_search_terms(
    terms: &[String],
    ctx: &mut TranslationContext,
    subject: &str,
) {
    for term in terms {
        let var = ctx.fresh_var();
        let escaped = escape_sparql_string(&term.to_lowercase());
        let predicate = format!("?_searchPred{}", &var[1..]);
        ctx.where_patterns
            .push(format!("{subject} {predicate} {var} ."));
        ctx.where_patterns
            .push(format!("FILTER(CONTAINS(LCASE(STR({var})), \"{escaped}\"))"));
    }
}
