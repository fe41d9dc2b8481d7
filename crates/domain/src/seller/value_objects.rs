//! Value objects for the seller domain.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a [`Money`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The code is not three upper-case ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),
}

/// ISO 4217 style currency code, three upper-case letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parses a currency code. The code is matched exactly; it is neither
    /// trimmed nor case-folded.
    pub fn new(code: &str) -> Result<Self, MoneyError> {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(MoneyError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    /// Pound sterling.
    pub fn gbp() -> Self {
        Self("GBP".to_string())
    }

    /// Returns the code as a string slice.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// Money amount held in minor units (pence, cents) to avoid floating point issues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor: i64,
    currency: Currency,
}

impl Money {
    /// Creates a money amount from minor units and a currency code.
    pub fn of_minor(minor: i64, currency: &str) -> Result<Self, MoneyError> {
        Ok(Self {
            minor,
            currency: Currency::new(currency)?,
        })
    }

    /// Creates a money amount from minor units in an already parsed currency.
    pub fn new(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Returns the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.minor
    }

    /// Returns the currency.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the whole major-unit portion.
    pub fn major_part(&self) -> i64 {
        self.minor / 100
    }

    /// Returns the minor-unit remainder after the major portion.
    pub fn minor_part(&self) -> i64 {
        self.minor.abs() % 100
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.minor < 0 {
            write!(
                f,
                "{} -{}.{:02}",
                self.currency,
                self.major_part().abs(),
                self.minor_part()
            )
        } else {
            write!(
                f,
                "{} {}.{:02}",
                self.currency,
                self.major_part(),
                self.minor_part()
            )
        }
    }
}

/// The kind of product a seller sells. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "digital")]
    DigitalProducts,
    #[serde(rename = "gambling")]
    GamblingServices,
    #[serde(rename = "financial")]
    FinancialServices,
}

impl ProductType {
    /// Every product type, in declaration order.
    pub const ALL: [ProductType; 3] = [
        ProductType::DigitalProducts,
        ProductType::GamblingServices,
        ProductType::FinancialServices,
    ];

    /// Returns the string tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::DigitalProducts => "digital",
            ProductType::GamblingServices => "gambling",
            ProductType::FinancialServices => "financial",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known product type tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown product type: {0:?}")]
pub struct ParseProductTypeError(pub String);

impl FromStr for ProductType {
    type Err = ParseProductTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseProductTypeError(s.to_string()))
    }
}
