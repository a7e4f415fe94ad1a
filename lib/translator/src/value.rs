use crate::TranslationContext;
use oslc_query_model::vocab::xsd;
use oslc_query_model::OslcValue;

/// Serializes a value to its SPARQL representation.
pub(crate) fn sparql_value(value: &OslcValue, ctx: &TranslationContext) -> String {
    match value {
        OslcValue::String(s) => format!("\"{}\"", escape_sparql_string(s)),
        OslcValue::Number(n) => n.clone(),
        OslcValue::Boolean(b) => format!("\"{b}\"^^{}", xsd::BOOLEAN),
        OslcValue::Uri(uri) => ctx.resolve_uri(uri),
    }
}

/// Escapes the characters that are special inside a SPARQL double-quoted
/// string literal.
pub(crate) fn escape_sparql_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
