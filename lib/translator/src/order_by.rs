use crate::TranslationContext;
use oslc_query_model::{OrderByTerm, SortDirection};

/// Builds an `ORDER BY` clause plus the OPTIONAL patterns that bind the
/// sort keys.
pub(crate) fn build_order_by(
    terms: &[OrderByTerm],
    ctx: &TranslationContext,
    subject: &str,
) -> (String, Vec<String>) {
    let mut parts = Vec::new();
    let mut patterns = Vec::new();
    for term in terms {
        let predicate = ctx.resolve_uri(&term.property);
        let var = ctx.fresh_var();
        patterns.push(format!("OPTIONAL {{ {subject} {predicate} {var} . }}"));
        parts.push(match term.direction {
            SortDirection::Ascending => format!("ASC({var})"),
            SortDirection::Descending => format!("DESC({var})"),
        });
    }
    (format!("ORDER BY {}", parts.join(" ")), patterns)
}
