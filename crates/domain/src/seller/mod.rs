//! Seller aggregate and related types.

mod aggregate;
mod record;
mod value_objects;

pub use aggregate::Seller;
pub use record::SellerRecord;
pub use value_objects::{Currency, Money, MoneyError, ParseProductTypeError, ProductType};

use thiserror::Error;

/// Maximum length of a seller name, in characters.
///
/// Counted as Unicode scalar values, not UTF-8 bytes: 255 copies of `é`
/// (510 bytes) fit. A byte-counting store would reject such a name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a seller description, in characters (see [`MAX_NAME_LENGTH`]).
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Smallest payout accepted, in minor units (100.00 in major units).
pub const MINIMUM_PAYOUT_MINOR: i64 = 10_000;

/// The only currency payouts are settled in.
pub const SETTLEMENT_CURRENCY: &str = "GBP";

/// Business rules a seller can violate during construction or hydration.
///
/// Variants are listed in the order the rules are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SellerError {
    /// Name is longer than [`MAX_NAME_LENGTH`].
    #[error("Seller name is too long.")]
    NameTooLong { length: usize },

    /// Description is longer than [`MAX_DESCRIPTION_LENGTH`].
    #[error("Seller description is too long.")]
    DescriptionTooLong { length: usize },

    /// Product type is not one of the known tags.
    #[error("Sold product type is invalid.")]
    InvalidProductType { value: String },

    /// Payout is below [`MINIMUM_PAYOUT_MINOR`].
    #[error("Payout below minimum")]
    PayoutBelowMinimum { amount: i64 },

    /// Payout currency is not the settlement currency.
    #[error("Currency not supported")]
    CurrencyNotSupported { currency: String },
}

impl SellerError {
    /// Short machine-readable label, used as a metrics dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            SellerError::NameTooLong { .. } => "name_too_long",
            SellerError::DescriptionTooLong { .. } => "description_too_long",
            SellerError::InvalidProductType { .. } => "invalid_product_type",
            SellerError::PayoutBelowMinimum { .. } => "payout_below_minimum",
            SellerError::CurrencyNotSupported { .. } => "currency_not_supported",
        }
    }
}
