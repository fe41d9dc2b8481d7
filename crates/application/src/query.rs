//! Seller queries and their DTOs.

use std::str::FromStr;

use domain::{ProductType, Seller};
use serde::Serialize;
use seller_store::{SellerId, SellerRepository};

use crate::Result;

/// Query for a single seller.
///
/// The identifier is kept as a raw string; one that does not parse simply
/// matches no seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSeller {
    pub seller_id: String,
}

impl ShowSeller {
    pub fn new(seller_id: impl Into<String>) -> Self {
        Self {
            seller_id: seller_id.into(),
        }
    }
}

/// Query for every seller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSellers;

/// Read-only view of a persisted seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSellerDto {
    pub id: SellerId,
    pub name: String,
    pub description: String,
    /// RFC 3339 with explicit offset.
    pub created_at: String,
    pub is_active: bool,
    pub sold_product_type: ProductType,
    pub payout_amount: i64,
    pub payout_currency: String,
}

impl ShowSellerDto {
    /// Builds the view for the seller stored under `id`.
    pub fn from_seller(id: SellerId, seller: &Seller) -> Self {
        Self {
            id,
            name: seller.name().to_string(),
            description: seller.description().to_string(),
            created_at: seller.created_at().to_rfc3339(),
            is_active: seller.is_active(),
            sold_product_type: seller.sold_product_type(),
            payout_amount: seller.payout_amount().minor(),
            payout_currency: seller.payout_amount().currency().code().to_string(),
        }
    }
}

/// All sellers, serialized as a JSON array in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListSellersDto {
    sellers: Vec<ShowSellerDto>,
}

impl ListSellersDto {
    pub fn sellers(&self) -> &[ShowSellerDto] {
        &self.sellers
    }

    pub fn len(&self) -> usize {
        self.sellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sellers.is_empty()
    }
}

impl IntoIterator for ListSellersDto {
    type Item = ShowSellerDto;
    type IntoIter = std::vec::IntoIter<ShowSellerDto>;

    fn into_iter(self) -> Self::IntoIter {
        self.sellers.into_iter()
    }
}

/// Handles [`ShowSeller`].
pub struct ShowSellerHandler<R: SellerRepository> {
    repository: R,
}

impl<R: SellerRepository> ShowSellerHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the seller's view, or None if there is no such seller.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, query: ShowSeller) -> Result<Option<ShowSellerDto>> {
        metrics::counter!("seller_queries_total", "query" => "show").increment(1);

        let Ok(seller_id) = SellerId::from_str(&query.seller_id) else {
            tracing::debug!("seller id does not parse");
            return Ok(None);
        };

        let seller = self.repository.find_by_id(&seller_id).await?;
        Ok(seller.map(|seller| ShowSellerDto::from_seller(seller_id, &seller)))
    }
}

/// Handles [`ListSellers`].
pub struct ListSellersHandler<R: SellerRepository> {
    repository: R,
}

impl<R: SellerRepository> ListSellersHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, _query: ListSellers) -> Result<ListSellersDto> {
        metrics::counter!("seller_queries_total", "query" => "list").increment(1);

        let sellers = self
            .repository
            .find_all()
            .await?
            .iter()
            .map(|(id, seller)| ShowSellerDto::from_seller(*id, seller))
            .collect();

        Ok(ListSellersDto { sellers })
    }
}
