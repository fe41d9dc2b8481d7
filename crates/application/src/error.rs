//! Application error types.

use domain::{MoneyError, SellerError};
use seller_store::StoreError;
use thiserror::Error;

/// Errors returned by command and query handlers.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A seller business rule was violated.
    #[error(transparent)]
    Seller(#[from] SellerError),

    /// The payout could not be expressed as money.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The repository failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApplicationError {
    /// Returns true when the caller's input caused the failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApplicationError::Seller(_) | ApplicationError::Money(_))
    }
}

/// Convenience type alias for handler results.
pub type Result<T> = std::result::Result<T, ApplicationError>;
