use sea_orm::DbErr;
use thiserror::Error;
use tokio::time::error::Elapsed;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("time slot already booked")]
    SlotAlreadyBooked,
    #[error("session not found or not authorized")]
    NotFoundOrNotAuthorized,
    #[error("no availability found for therapist")]
    NoAvailability,
    #[error("persistence call exceeded its time budget")]
    Timeout(#[from] Elapsed),
    #[error("persistence unavailable")]
    Unavailable(#[from] DbErr),
}
