use oslc_query_model::{well_known_namespace, PrefixMap};
use std::cell::Cell;
use std::rc::Rc;

/// Per-translation state: prefix resolution, a fresh-variable counter, and
/// the accumulating CONSTRUCT/WHERE pattern lists.
///
/// Never shared across requests; each [`crate::to_sparql`] call creates its
/// own context and counter.
#[derive(Debug)]
pub struct TranslationContext {
    /// Shared across parent and child contexts so generated variable names
    /// are unique within one translation.
    counter: Rc<Cell<u32>>,
    prefixes: Rc<PrefixMap>,
    pub construct_patterns: Vec<String>,
    pub where_patterns: Vec<String>,
}

impl TranslationContext {
    pub fn new(prefixes: PrefixMap) -> Self {
        Self {
            counter: Rc::new(Cell::new(0)),
            prefixes: Rc::new(prefixes),
            construct_patterns: Vec::new(),
            where_patterns: Vec::new(),
        }
    }

    /// Generates a fresh SPARQL variable name.
    pub fn fresh_var(&self) -> String {
        let n = self.counter.get();
        self.counter.set(n + 1);
        format!("?_v{n}")
    }

    /// A context with its own pattern lists but the same prefix map and
    /// variable counter. Used to build isolated scopes (OR branches,
    /// subqueries) without cross-contaminating the parent's patterns.
    pub fn child_context(&self) -> Self {
        Self {
            counter: Rc::clone(&self.counter),
            prefixes: Rc::clone(&self.prefixes),
            construct_patterns: Vec::new(),
            where_patterns: Vec::new(),
        }
    }

    /// Resolves a property or resource name to angle-bracketed URI form.
    ///
    /// Full URIs are wrapped as-is; `prefix:local` names resolve against
    /// the query-declared prefixes first, then the well-known table. An
    /// unresolvable prefixed name is wrapped raw so the emitted SPARQL
    /// stays syntactically valid instead of failing the translation.
    pub fn resolve_uri(&self, name: &str) -> String {
        if name.contains("://") {
            return format!("<{name}>");
        }

        let Some((prefix, local)) = name.split_once(':') else {
            // No prefix at all; callers normally never produce this.
            return name.to_owned();
        };

        if let Some(ns) = self.prefixes.get(prefix) {
            return format!("<{ns}{local}>");
        }
        if let Some(ns) = well_known_namespace(prefix) {
            return format!("<{ns}{local}>");
        }

        format!("<{name}>")
    }
}
