use domain::SellerError;
use thiserror::Error;

/// Errors that can occur when interacting with a seller repository.
///
/// Missing sellers are not errors; lookups return `None` for them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot built for storage failed re-validation.
    #[error("Stored seller failed validation: {0}")]
    InvalidSnapshot(#[from] SellerError),

    /// The backing store could not serve the request.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
