//! Flat interchange shape of a seller.

use chrono::{DateTime, FixedOffset};
use common::SellerId;
use serde::{Deserialize, Serialize};

/// Flat, serializable view of a seller.
///
/// This is the shape stored by repositories and returned by the API. It
/// carries no guarantees on its own: turn it back into a `Seller` with
/// `Seller::hydrate`, which re-runs every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRecord {
    pub id: Option<SellerId>,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    #[serde(with = "rfc3339")]
    pub created_at: DateTime<FixedOffset>,
    pub sold_product_type: String,
    pub payout_amount: i64,
    pub payout_currency: String,
}

impl SellerRecord {
    /// Returns the record with `id` replaced.
    pub fn with_id(mut self, id: SellerId) -> Self {
        self.id = Some(id);
        self
    }
}

/// RFC 3339 timestamps that always spell out the offset (`+00:00`, never `Z`).
mod rfc3339 {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}
