//! Application layer for the seller service.
//!
//! Commands and queries are plain data; their handlers turn them into
//! `Seller` constructions and repository calls, and turn sellers back into
//! DTOs for the outside world.

pub mod command;
pub mod error;
pub mod query;
pub mod service;

pub use command::{CreateSeller, CreateSellerHandler};
pub use error::{ApplicationError, Result};
pub use query::{
    ListSellers, ListSellersDto, ListSellersHandler, ShowSeller, ShowSellerDto, ShowSellerHandler,
};
pub use service::SellerService;
