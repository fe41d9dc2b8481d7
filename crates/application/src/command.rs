//! Seller commands.

use domain::{Money, Seller};
use seller_store::{SellerId, SellerRepository};

use crate::Result;

/// Command to create a new seller.
///
/// Fields are already typed primitives; no coercion happens past this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSeller {
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub sold_product_type: String,
    /// Payout in minor units (pence).
    pub payout_amount: i64,
    pub payout_currency: String,
}

impl CreateSeller {
    /// Creates a new CreateSeller command.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
        sold_product_type: impl Into<String>,
        payout_amount: i64,
        payout_currency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_active,
            sold_product_type: sold_product_type.into(),
            payout_amount,
            payout_currency: payout_currency.into(),
        }
    }
}

/// Handles [`CreateSeller`] by building the aggregate and saving it.
pub struct CreateSellerHandler<R: SellerRepository> {
    repository: R,
}

impl<R: SellerRepository> CreateSellerHandler<R> {
    /// Creates a new handler backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validates and persists the seller, returning its new identifier.
    #[tracing::instrument(skip(self, cmd), fields(seller_name = %cmd.name))]
    pub async fn handle(&self, cmd: CreateSeller) -> Result<SellerId> {
        let payout = Money::of_minor(cmd.payout_amount, &cmd.payout_currency)?;

        let seller = Seller::create(
            cmd.name,
            cmd.description,
            cmd.is_active,
            &cmd.sold_product_type,
            payout,
        )
        .inspect_err(|err| {
            metrics::counter!("seller_validation_failures_total", "reason" => err.reason())
                .increment(1);
            tracing::info!(reason = err.reason(), "seller rejected");
        })?;

        let seller_id = self.repository.save(&seller).await?;

        metrics::counter!("sellers_created_total").increment(1);
        tracing::info!(%seller_id, "seller created");

        Ok(seller_id)
    }
}
