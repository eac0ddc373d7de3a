use crate::routes::error::ErrorBody;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use kokoro_core::assessment::error::AssessmentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AssessmentRouteError {
    #[error("request body does not match the submission shape")]
    InvalidBody,
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

impl IntoResponse for AssessmentRouteError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidBody
            | Self::Assessment(AssessmentError::InvalidSubmission)
            | Self::Assessment(AssessmentError::UnknownOption(_)) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new("Invalid input format"))
            }
            Self::Assessment(AssessmentError::Timeout(_)) | Self::Assessment(AssessmentError::Unavailable(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::new("Service temporarily unavailable"),
            ),
        };
        (status, Json(body)).into_response()
    }
}
