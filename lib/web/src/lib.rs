use axum::{routing::get, Router};
use oslc_query::model::PrefixMap;
use oslc_query::storage::ConstructQueryExecutor;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

mod config;
mod error;
mod query;

pub use config::ServerConfig;
pub use error::OslcQueryServerError;

use crate::query::handle_query_get;

/// Serves a single OSLC query capability over HTTP.
///
/// `GET /query?oslc.where=...&oslc.select=...` translates the request into
/// a SPARQL CONSTRUCT query, runs it through the configured executor, and
/// returns the resulting graph as N-Triples. Paged requests additionally
/// carry an `oslc:ResponseInfo` resource pointing at the next page.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from_str(&config.bind)?;

    let app_state = AppState {
        executor: config.executor,
        app_base: config.app_base,
        resource_type: config.resource_type,
        default_prefixes: config.default_prefixes,
    };

    let app = Router::new()
        .route("/query", get(handle_query_get))
        .with_state(app_state);

    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    Ok(axum::serve(listener, app).await?)
}

#[derive(Clone)]
struct AppState {
    executor: Arc<dyn ConstructQueryExecutor>,
    app_base: String,
    resource_type: String,
    default_prefixes: PrefixMap,
}
