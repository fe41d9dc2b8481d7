//! Seller service bundling the command and query handlers.

use seller_store::{SellerId, SellerRepository};

use crate::Result;
use crate::command::{CreateSeller, CreateSellerHandler};
use crate::query::{
    ListSellers, ListSellersDto, ListSellersHandler, ShowSeller, ShowSellerDto, ShowSellerHandler,
};

/// Service for managing sellers.
///
/// Wires every handler to one repository so callers hold a single value.
pub struct SellerService<R: SellerRepository + Clone> {
    create: CreateSellerHandler<R>,
    show: ShowSellerHandler<R>,
    list: ListSellersHandler<R>,
}

impl<R: SellerRepository + Clone> SellerService<R> {
    /// Creates a new seller service over the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            create: CreateSellerHandler::new(repository.clone()),
            show: ShowSellerHandler::new(repository.clone()),
            list: ListSellersHandler::new(repository),
        }
    }

    /// Creates a seller and returns its identifier.
    pub async fn create_seller(&self, cmd: CreateSeller) -> Result<SellerId> {
        self.create.handle(cmd).await
    }

    /// Loads a seller by identifier.
    ///
    /// Returns None if the seller doesn't exist.
    pub async fn show_seller(&self, query: ShowSeller) -> Result<Option<ShowSellerDto>> {
        self.show.handle(query).await
    }

    /// Lists every seller in insertion order.
    pub async fn list_sellers(&self) -> Result<ListSellersDto> {
        self.list.handle(ListSellers).await
    }
}
