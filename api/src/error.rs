use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tonic::Code;
use tracing::error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("race not found")]
    NotFound,

    #[error("upstream call failed: {0}")]
    Upstream(#[from] tonic::Status),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP rendering of a failed upstream call. The backends surface
/// repository failures as plain status codes; everything the gateway
/// cannot attribute to the caller maps onto a 5xx.
fn upstream_status(code: Code) -> StatusCode {
    match code {
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::Unavailable | Code::DeadlineExceeded => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream(status) => upstream_status(status.code()),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if !matches!(self, ApiError::InvalidRequest(_) | ApiError::NotFound) {
            error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_codes_map_onto_http_statuses() {
        assert_eq!(upstream_status(Code::InvalidArgument), StatusCode::BAD_REQUEST);
        assert_eq!(upstream_status(Code::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(upstream_status(Code::Unavailable), StatusCode::BAD_GATEWAY);
        assert_eq!(
            upstream_status(Code::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
