use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use oslc_query::storage::StorageError;
use oslc_query::ParseError;

#[derive(thiserror::Error, Debug)]
pub enum OslcQueryServerError {
    #[error("Bad request: {0}")]
    BadRequest(#[from] ParseError),
    #[error("Query execution failed: {0}")]
    Storage(#[from] StorageError),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl IntoResponse for OslcQueryServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            OslcQueryServerError::BadRequest(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            OslcQueryServerError::Storage(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            OslcQueryServerError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, message).into_response()
    }
}
