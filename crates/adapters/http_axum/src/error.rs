//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catpoint_domain::error::{CatpointError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CatpointError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CatpointError);

impl From<CatpointError> for ApiError {
    fn from(err: CatpointError) -> Self {
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
            CatpointError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CatpointError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CatpointError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            CatpointError::Classifier(err) => {
                tracing::error!(error = %err, "classifier error");
                (
                    StatusCode::BAD_GATEWAY,
                    "image classification failed".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
