use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a persisted seller.
///
/// Backed by a UUID v7, so identifiers sort in creation order and render
/// as plain strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(Uuid);

impl SellerId {
    /// Creates a new time-ordered seller ID.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a seller ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SellerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a string is not a valid seller identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid seller id: {0}")]
pub struct ParseSellerIdError(String);

impl FromStr for SellerId {
    type Err = ParseSellerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ParseSellerIdError(s.to_string()))
    }
}

impl From<Uuid> for SellerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SellerId> for Uuid {
    fn from(id: SellerId) -> Self {
        id.0
    }
}
