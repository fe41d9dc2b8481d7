//! Seller endpoints.

use std::sync::Arc;

use application::{CreateSeller, ListSellersDto, SellerService, ShowSeller, ShowSellerDto};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use seller_store::SellerRepository;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: SellerRepository + Clone> {
    pub seller_service: SellerService<R>,
}

#[derive(Serialize)]
pub struct SellerCreatedResponse {
    pub seller_id: String,
}

/// POST /api/sellers
///
/// The body is checked field by field so the client learns which field is
/// wrong; business rules are left to the domain. A body that is missing or
/// not JSON has no fields, so the first field check reports it.
#[tracing::instrument(skip(state, body))]
pub async fn create<R: SellerRepository + Clone + 'static>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SellerCreatedResponse>), ApiError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "request body is not JSON");
            Value::Null
        }
    };
    let cmd = parse_create_request(&body)?;
    let seller_id = state.seller_service.create_seller(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(SellerCreatedResponse {
            seller_id: seller_id.to_string(),
        }),
    ))
}

/// GET /api/sellers/{seller_id}
#[tracing::instrument(skip(state))]
pub async fn show<R: SellerRepository + Clone + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(seller_id): Path<String>,
) -> Result<Json<ShowSellerDto>, ApiError> {
    let dto = state
        .seller_service
        .show_seller(ShowSeller::new(seller_id.as_str()))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Seller {seller_id} not found")))?;

    Ok(Json(dto))
}

/// GET /api/sellers
#[tracing::instrument(skip(state))]
pub async fn list<R: SellerRepository + Clone + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<ListSellersDto>, ApiError> {
    Ok(Json(state.seller_service.list_sellers().await?))
}

fn parse_create_request(body: &Value) -> Result<CreateSeller, ApiError> {
    // The product type field is plural on the wire; the singular is accepted too.
    let product_type = body
        .get("sold_product_types")
        .or_else(|| body.get("sold_product_type"));

    Ok(CreateSeller {
        name: string_field(body.get("name"), "name")?,
        description: string_field(body.get("description"), "description")?,
        is_active: body
            .get("is_active")
            .and_then(Value::as_bool)
            .ok_or_else(|| invalid_field("is_active", "a boolean"))?,
        sold_product_type: string_field(product_type, "sold_product_types")?,
        payout_amount: body
            .get("payout_amount")
            .and_then(Value::as_i64)
            .ok_or_else(|| invalid_field("payout_amount", "an integer"))?,
        payout_currency: string_field(body.get("payout_currency"), "payout_currency")?,
    })
}

fn string_field(value: Option<&Value>, field: &str) -> Result<String, ApiError> {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| invalid_field(field, "a string"))
}

fn invalid_field(field: &str, expected: &str) -> ApiError {
    ApiError::BadRequest(format!("{field} must be {expected}."))
}
