use crate::value::sparql_value;
use crate::TranslationContext;
use itertools::Itertools;
use oslc_query_model::{LogicalOperator, OslcValue, WhereExpression};

/// Appends the WHERE patterns for a where-clause AST node to
/// `ctx.where_patterns`, with `subject` as the current subject variable.
pub(crate) fn translate_where(
    expr: &WhereExpression,
    ctx: &mut TranslationContext,
    subject: &str,
) {
    match expr {
        WhereExpression::Comparison {
            property,
            operator,
            value,
        } => {
            let predicate = ctx.resolve_uri(property);
            let var = ctx.fresh_var();
            let value = sparql_value(value, ctx);
            ctx.where_patterns
                .push(format!("{subject} {predicate} {var} ."));
            ctx.where_patterns
                .push(format!("FILTER({var} {operator} {value})"));
        }
        WhereExpression::In { property, values } => {
            translate_in(property, values, ctx, subject);
        }
        WhereExpression::Nested { property, inner } => {
            let predicate = ctx.resolve_uri(property);
            let nested_var = ctx.fresh_var();
            ctx.where_patterns
                .push(format!("{subject} {predicate} {nested_var} ."));
            translate_where(inner, ctx, &nested_var);
        }
        WhereExpression::Compound { operator, operands } => match operator {
            // Conjunction needs no wrapping: SPARQL triple patterns
            // conjoin naturally against the shared subject.
            LogicalOperator::And => {
                for operand in operands {
                    translate_where(operand, ctx, subject);
                }
            }
            LogicalOperator::Or => translate_or(operands, ctx, subject),
        },
    }
}

fn translate_in(
    property: &str,
    values: &[OslcValue],
    ctx: &mut TranslationContext,
    subject: &str,
) {
    let predicate = ctx.resolve_uri(property);
    let var = ctx.fresh_var();
    let values = values.iter().map(|v| sparql_value(v, ctx)).join(", ");
    ctx.where_patterns
        .push(format!("{subject} {predicate} {var} ."));
    ctx.where_patterns.push(format!("FILTER({var} IN ({values}))"));
}

/// SPARQL has no native disjunction over triple-pattern blocks, so each
/// branch is translated into its own child context, wrapped in
/// `OPTIONAL { ... BIND(true AS markerN) }`, and a trailing
/// `FILTER(BOUND(marker1) || ...)` requires at least one branch to have
/// matched.
fn translate_or(operands: &[WhereExpression], ctx: &mut TranslationContext, subject: &str) {
    let mut markers = Vec::new();
    for operand in operands {
        let mut branch = ctx.child_context();
        translate_where(operand, &mut branch, subject);
        let marker = ctx.fresh_var();
        let branch_patterns = branch.where_patterns.join("\n    ");
        ctx.where_patterns.push(format!(
            "OPTIONAL {{\n    {branch_patterns}\n    BIND(true AS {marker})\n  }}"
        ));
        markers.push(marker);
    }
    let bound_checks = markers.iter().map(|m| format!("BOUND({m})")).join(" || ");
    ctx.where_patterns.push(format!("FILTER({bound_checks})"));
}
