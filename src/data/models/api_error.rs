use diesel::result::Error as DieselError;
use thiserror::Error;

/// Every failure a study-session endpoint can report.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Database integrity error: {0}")]
    Integrity(String),
    #[error("Database error")]
    Database(DieselError),
    #[error("Connection pool error")]
    Pool(r2d2::Error),
    #[error("Server error: {0}")]
    Internal(String),
}
