use crate::error::StorageError;
use async_trait::async_trait;
use oslc_query_model::Graph;

/// Result of executing a CONSTRUCT query against the backing triple store.
#[derive(Debug)]
pub struct ConstructQueryOutcome {
    /// HTTP-style status code reported by the store.
    pub status: u16,
    /// The constructed graph; `None` when the store reported a failure.
    pub results: Option<Graph>,
}

/// Executes SPARQL CONSTRUCT queries against a triple store.
///
/// The query path only ever reads through this interface; how the store
/// runs the query (and with which timeouts) is its own concern.
#[async_trait]
pub trait ConstructQueryExecutor: Send + Sync {
    async fn construct_query(&self, sparql: &str) -> Result<ConstructQueryOutcome, StorageError>;
}
