//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pothub_domain::error::{PotHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PotHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(PotHubError);

impl From<PotHubError> for ApiError {
    fn from(err: PotHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PotHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PotHubError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            PotHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
