pub mod error;
pub mod memory;
pub mod store;

pub use common::SellerId;
pub use error::{Result, StoreError};
pub use memory::InMemorySellerRepository;
pub use store::SellerRepository;
