//! Shared types used across the seller service crates.

pub mod types;

pub use types::{ParseSellerIdError, SellerId};
