use sea_orm::DbErr;
use thiserror::Error;
use tokio::time::error::Elapsed;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("invalid input format")]
    InvalidSubmission,
    #[error("option id {0} does not exist")]
    UnknownOption(i32),
    #[error("persistence call exceeded its time budget")]
    Timeout(#[from] Elapsed),
    #[error("persistence unavailable")]
    Unavailable(#[from] DbErr),
}
