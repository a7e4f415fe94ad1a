use oslc_query::model::PrefixMap;
use oslc_query::storage::ConstructQueryExecutor;
use std::sync::Arc;

/// Holds the configuration for an OSLC query capability server.
pub struct ServerConfig {
    /// The SPARQL endpoint the translated queries are executed against.
    pub executor: Arc<dyn ConstructQueryExecutor>,
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// Base URL the server is reachable under externally, without a
    /// trailing slash. Used to build absolute page URIs.
    pub app_base: String,
    /// The `rdf:type` every query served by this capability is constrained to.
    pub resource_type: String,
    /// Prefixes available to clients without an `oslc.prefix` declaration.
    /// Declarations in the request shadow these.
    pub default_prefixes: PrefixMap,
    /// Whether CORS is enabled.
    pub cors: bool,
}
