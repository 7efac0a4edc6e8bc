//! Error classifier: maps `AppError` kinds to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use geoscope_core::error::{AppError, ErrorKind};
use geoscope_core::types::ApiResponse;

/// Message returned in place of any internal error detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>` and convert domain errors with `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Status code for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorKind::RouteNotFound => StatusCode::NOT_FOUND,
        ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::SourceUnavailable | ErrorKind::SourceMalformed => StatusCode::BAD_GATEWAY,
        ErrorKind::RecordIncomplete
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Internal server error"
            );
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            if err.kind.is_source_failure() {
                tracing::warn!(kind = %err.kind, error = %err.message, "Upstream feed failure");
            }
            err.message
        };

        let body: ApiResponse<()> = ApiResponse::failure(message);
        (status, Json(body)).into_response()
    }
}
