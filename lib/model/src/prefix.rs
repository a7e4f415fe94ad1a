use std::collections::HashMap;

/// Mapping from prefix names to namespace URIs.
///
/// Declared per-query via `oslc.prefix`; merged over well-known prefixes at
/// translation time, with query-declared entries taking priority.
pub type PrefixMap = HashMap<String, String>;

/// Prefixes that may be used in queries without an `oslc.prefix`
/// declaration. Query-declared prefixes shadow these.
pub const WELL_KNOWN_PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("oslc", "http://open-services.net/ns/core#"),
    ("oslc_cm", "http://open-services.net/ns/cm#"),
    ("oslc_rm", "http://open-services.net/ns/rm#"),
    ("oslc_qm", "http://open-services.net/ns/qm#"),
    ("oslc_am", "http://open-services.net/ns/am#"),
    ("oslc_config", "http://open-services.net/ns/config#"),
];

/// Looks up a namespace URI in the well-known prefix table.
pub fn well_known_namespace(prefix: &str) -> Option<&'static str> {
    WELL_KNOWN_PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, ns)| *ns)
}
