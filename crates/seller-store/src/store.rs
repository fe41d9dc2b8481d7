use async_trait::async_trait;
use domain::Seller;
use indexmap::IndexMap;

use crate::{Result, SellerId};

/// Storage contract for seller aggregates.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Persists a seller under a freshly generated identifier.
    ///
    /// The stored snapshot is rebuilt through `Seller::hydrate` with the new
    /// identifier injected, so it passes the same rules as the input.
    /// Identifiers are never reused, including under concurrent calls.
    async fn save(&self, seller: &Seller) -> Result<SellerId>;

    /// Retrieves a seller by identifier.
    ///
    /// Returns None if no seller has that identifier.
    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>>;

    /// Retrieves every stored seller, keyed by identifier, in insertion order.
    async fn find_all(&self) -> Result<IndexMap<SellerId, Seller>>;

    /// Checks whether a seller with this identifier is stored.
    async fn exists(&self, id: &SellerId) -> Result<bool>;
}
