//! Seller aggregate implementation.

use chrono::{DateTime, FixedOffset, Utc};
use common::SellerId;
use serde::{Serialize, Serializer};

use super::record::SellerRecord;
use super::value_objects::{Money, ProductType};
use super::{
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MINIMUM_PAYOUT_MINOR, SETTLEMENT_CURRENCY,
    SellerError,
};

/// Seller aggregate root.
///
/// A `Seller` can only be obtained through [`Seller::create`] or
/// [`Seller::hydrate`], and both run the same rules in the same order:
///
/// 1. name at most [`MAX_NAME_LENGTH`] characters
/// 2. description at most [`MAX_DESCRIPTION_LENGTH`] characters
/// 3. product type is a known tag
/// 4. payout at least [`MINIMUM_PAYOUT_MINOR`] minor units
/// 5. payout in [`SETTLEMENT_CURRENCY`]
///
/// There are no mutators. The identifier is attached by a repository when
/// the seller is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    id: Option<SellerId>,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<FixedOffset>,
    sold_product_type: ProductType,
    payout_amount: Money,
}

impl Seller {
    /// Creates a new, not yet persisted seller stamped with the current time.
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
        sold_product_type: &str,
        payout_amount: Money,
    ) -> Result<Self, SellerError> {
        let name = name.into();
        let description = description.into();

        validate_name(&name)?;
        validate_description(&description)?;
        let sold_product_type = parse_product_type(sold_product_type)?;
        validate_minimum_payout(payout_amount.minor())?;
        validate_currency(payout_amount.currency().code())?;

        Ok(Self {
            id: None,
            name,
            description,
            is_active,
            created_at: Utc::now().into(),
            sold_product_type,
            payout_amount,
        })
    }

    /// Rebuilds a seller from a persisted record.
    ///
    /// The identifier and creation time are taken from the record as-is;
    /// everything else is validated exactly as in [`Seller::create`].
    pub fn hydrate(record: SellerRecord) -> Result<Self, SellerError> {
        validate_name(&record.name)?;
        validate_description(&record.description)?;
        let sold_product_type = parse_product_type(&record.sold_product_type)?;
        validate_minimum_payout(record.payout_amount)?;
        validate_currency(&record.payout_currency)?;

        let payout_amount =
            Money::of_minor(record.payout_amount, &record.payout_currency).map_err(|_| {
                SellerError::CurrencyNotSupported {
                    currency: record.payout_currency.clone(),
                }
            })?;

        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            is_active: record.is_active,
            created_at: record.created_at,
            sold_product_type,
            payout_amount,
        })
    }

    /// Returns the identifier, if the seller has been persisted.
    pub fn id(&self) -> Option<SellerId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn sold_product_type(&self) -> ProductType {
        self.sold_product_type
    }

    pub fn payout_amount(&self) -> &Money {
        &self.payout_amount
    }

    /// Flattens the seller into its interchange record.
    pub fn to_record(&self) -> SellerRecord {
        SellerRecord {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
            sold_product_type: self.sold_product_type.as_str().to_string(),
            payout_amount: self.payout_amount.minor(),
            payout_currency: self.payout_amount.currency().code().to_string(),
        }
    }
}

impl Serialize for Seller {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

fn validate_name(name: &str) -> Result<(), SellerError> {
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(SellerError::NameTooLong { length });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), SellerError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(SellerError::DescriptionTooLong { length });
    }
    Ok(())
}

fn parse_product_type(value: &str) -> Result<ProductType, SellerError> {
    value
        .parse()
        .map_err(|_| SellerError::InvalidProductType {
            value: value.to_string(),
        })
}

fn validate_minimum_payout(amount: i64) -> Result<(), SellerError> {
    if amount < MINIMUM_PAYOUT_MINOR {
        return Err(SellerError::PayoutBelowMinimum { amount });
    }
    Ok(())
}

fn validate_currency(code: &str) -> Result<(), SellerError> {
    if code != SETTLEMENT_CURRENCY {
        return Err(SellerError::CurrencyNotSupported {
            currency: code.to_string(),
        });
    }
    Ok(())
}
