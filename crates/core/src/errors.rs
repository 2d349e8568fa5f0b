use thiserror::Error;

/// Error taxonomy shared by every layer of the booking service.
///
/// Handlers map these onto HTTP responses: `NotFound` → 404, `Validation` →
/// 400, `Authentication` → 401, `Authorization` → 403, the rest → 500.
#[derive(Error, Debug)]
pub enum SalonError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type SalonResult<T> = Result<T, SalonError>;
