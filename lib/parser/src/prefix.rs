//! Parser for the `oslc.prefix` parameter.

use crate::ParseError;
use oslc_query_model::PrefixMap;

/// Parses an `oslc.prefix` value of the form
/// `pfx1=<uri1>,pfx2=<uri2>` into a [`PrefixMap`].
///
/// Empty input yields an empty map. A declaration without `=` or with an
/// empty prefix name is an error.
pub fn parse_prefixes(input: &str) -> Result<PrefixMap, ParseError> {
    let mut map = PrefixMap::new();
    if input.trim().is_empty() {
        return Ok(map);
    }

    for entry in split_entries(input) {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((prefix, uri)) = trimmed.split_once('=') else {
            return Err(ParseError::PrefixMissingEquals(trimmed.to_owned()));
        };

        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(ParseError::EmptyPrefixName(trimmed.to_owned()));
        }

        let mut uri = uri.trim();
        if let Some(stripped) = uri.strip_prefix('<').and_then(|u| u.strip_suffix('>')) {
            uri = stripped;
        }

        map.insert(prefix.to_owned(), uri.to_owned());
    }

    Ok(map)
}

/// Splits on commas that occur outside `<...>`. Namespace URIs may in
/// principle contain commas within their brackets; the split must not break
/// on those.
fn split_entries(input: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut in_brackets = false;

    for ch in input.chars() {
        match ch {
            '<' => {
                in_brackets = true;
                current.push(ch);
            }
            '>' => {
                in_brackets = false;
                current.push(ch);
            }
            ',' if !in_brackets => {
                entries.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        entries.push(current);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_declarations() {
        let map = parse_prefixes(
            "dcterms=<http://purl.org/dc/terms/>,oslc=<http://open-services.net/ns/core#>",
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("dcterms").map(String::as_str),
            Some("http://purl.org/dc/terms/")
        );
        assert_eq!(
            map.get("oslc").map(String::as_str),
            Some("http://open-services.net/ns/core#")
        );
    }

    #[test]
    fn empty_input_is_empty_map() {
        assert!(parse_prefixes("").unwrap().is_empty());
        assert!(parse_prefixes("   ").unwrap().is_empty());
    }

    #[test]
    fn comma_inside_brackets_does_not_split() {
        let map = parse_prefixes("odd=<http://example.org/a,b#>,x=<urn:x:>").unwrap();
        assert_eq!(
            map.get("odd").map(String::as_str),
            Some("http://example.org/a,b#")
        );
        assert_eq!(map.get("x").map(String::as_str), Some("urn:x:"));
    }

    #[test]
    fn missing_equals_is_an_error() {
        assert_eq!(
            parse_prefixes("dcterms<http://purl.org/dc/terms/>"),
            Err(ParseError::PrefixMissingEquals(
                "dcterms<http://purl.org/dc/terms/>".into()
            ))
        );
    }

    #[test]
    fn empty_prefix_name_is_an_error() {
        assert!(matches!(
            parse_prefixes("=<http://example.org/>"),
            Err(ParseError::EmptyPrefixName(_))
        ));
    }

    #[test]
    fn unbracketed_uri_is_tolerated() {
        let map = parse_prefixes("dcterms=http://purl.org/dc/terms/").unwrap();
        assert_eq!(
            map.get("dcterms").map(String::as_str),
            Some("http://purl.org/dc/terms/")
        );
    }
}
