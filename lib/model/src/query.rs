use crate::{OrderByTerm, PrefixMap, SelectTerm, WhereExpression};

/// A fully parsed set of OSLC query parameters.
///
/// Every field except `prefixes` is optional: `None` means the parameter was
/// not supplied, which callers must distinguish from "supplied but empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OslcQuery {
    pub prefixes: PrefixMap,
    pub where_clause: Option<WhereExpression>,
    pub select: Option<Vec<SelectTerm>>,
    pub order_by: Option<Vec<OrderByTerm>>,
    pub search_terms: Option<Vec<String>>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

impl OslcQuery {
    /// Whether any top-level select term is a wildcard. A wildcard degrades
    /// the whole select clause to a full-representation query.
    pub fn select_has_wildcard(&self) -> bool {
        self.select
            .as_deref()
            .is_some_and(|terms| terms.iter().any(SelectTerm::is_wildcard))
    }

    /// Whether the query requests an explicit, wildcard-free property
    /// selection.
    pub fn has_property_selection(&self) -> bool {
        self.select.as_deref().is_some_and(|terms| !terms.is_empty())
            && !self.select_has_wildcard()
    }
}
