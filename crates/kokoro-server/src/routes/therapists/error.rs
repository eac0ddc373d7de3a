use crate::routes::error::ErrorBody;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use kokoro_core::booking::error::BookingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum TherapistError {
    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl IntoResponse for TherapistError {
    fn into_response(self) -> Response {
        let Self::Booking(error) = self;
        let (status, body) = match error {
            BookingError::SlotAlreadyBooked => (StatusCode::BAD_REQUEST, ErrorBody::new("Time slot already booked")),
            BookingError::NotFoundOrNotAuthorized => {
                (StatusCode::NOT_FOUND, ErrorBody::new("Session not found or not authorized"))
            }
            BookingError::NoAvailability => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("No availability found for the selected therapist"),
            ),
            BookingError::Timeout(_) | BookingError::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::new("Service temporarily unavailable"),
            ),
        };
        (status, Json(body)).into_response()
    }
}
