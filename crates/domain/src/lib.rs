//! Domain layer for the seller service.
//!
//! This crate provides:
//! - the `Seller` aggregate, whose construction enforces every business rule
//! - `Money` and `ProductType` value objects
//! - `SellerRecord`, the flat shape used for persistence and API responses

pub mod seller;

pub use common::SellerId;
pub use seller::{
    Currency, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MINIMUM_PAYOUT_MINOR, Money, MoneyError,
    ParseProductTypeError, ProductType, SETTLEMENT_CURRENCY, Seller, SellerError, SellerRecord,
};
