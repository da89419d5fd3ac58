//! Error types for the site API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_bench::BenchError;
use folio_topology::TopologyError;
use folio_view::ViewError;
use serde::Serialize;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<TopologyError> for ApiError {
    fn from(e: TopologyError) -> Self {
        match e {
            TopologyError::UnknownNode { .. } | TopologyError::NoPath { .. } => {
                ApiError::NotFound(e.to_string())
            }
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ViewError> for ApiError {
    fn from(e: ViewError) -> Self {
        match e {
            ViewError::Topology(inner) => inner.into(),
            ViewError::UnknownNode(_) | ViewError::UnknownEdge { .. } => {
                ApiError::NotFound(e.to_string())
            }
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<BenchError> for ApiError {
    fn from(e: BenchError) -> Self {
        match e {
            BenchError::UnknownRegime(_) => ApiError::BadRequest(e.to_string()),
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_errors_map_to_not_found() {
        let err: ApiError = TopologyError::NoPath { from: 0, to: 9 }.into();
        assert!(matches!(err, ApiError::NotFound(_)));
        let err: ApiError = TopologyError::DuplicateNode(3).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_view_errors_unwrap_topology() {
        let err: ApiError = ViewError::Topology(TopologyError::UnknownNode { node: 42 }).into();
        assert_eq!(err.to_string(), "Not found: Unknown node Q42");
    }

    #[test]
    fn test_unknown_regime_is_bad_request() {
        let err: ApiError = BenchError::UnknownRegime("awful".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
