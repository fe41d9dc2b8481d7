use std::sync::Arc;

use async_trait::async_trait;
use domain::Seller;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::{Result, SellerId, store::SellerRepository};

/// In-memory seller repository.
///
/// Sellers live in an insertion-ordered map behind a read/write lock.
/// Clones share the same map. Nothing survives the process.
#[derive(Clone, Default)]
pub struct InMemorySellerRepository {
    sellers: Arc<RwLock<IndexMap<SellerId, Seller>>>,
}

impl InMemorySellerRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sellers.
    pub async fn len(&self) -> usize {
        self.sellers.read().await.len()
    }

    /// Returns true if no seller has been stored.
    pub async fn is_empty(&self) -> bool {
        self.sellers.read().await.is_empty()
    }

    /// Removes every stored seller.
    pub async fn clear(&self) {
        self.sellers.write().await.clear();
    }
}

#[async_trait]
impl SellerRepository for InMemorySellerRepository {
    #[tracing::instrument(skip(self, seller), fields(seller_name = %seller.name()))]
    async fn save(&self, seller: &Seller) -> Result<SellerId> {
        // Held across id generation and insert so concurrent saves cannot collide.
        let mut sellers = self.sellers.write().await;

        let id = loop {
            let candidate = SellerId::new();
            if !sellers.contains_key(&candidate) {
                break candidate;
            }
        };

        let snapshot = Seller::hydrate(seller.to_record().with_id(id))?;
        sellers.insert(id, snapshot);

        metrics::counter!("seller_store_saves_total").increment(1);
        tracing::debug!(seller_id = %id, total = sellers.len(), "seller stored");

        Ok(id)
    }

    #[tracing::instrument(skip(self, id), fields(seller_id = %id))]
    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>> {
        Ok(self.sellers.read().await.get(id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<IndexMap<SellerId, Seller>> {
        Ok(self.sellers.read().await.clone())
    }

    #[tracing::instrument(skip(self, id), fields(seller_id = %id))]
    async fn exists(&self, id: &SellerId) -> Result<bool> {
        Ok(self.sellers.read().await.contains_key(id))
    }
}
