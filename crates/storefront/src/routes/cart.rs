//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use karigar_core::{CartItemId, ProductId, UserId};

use super::parse_id;
use crate::error::{Result, Success};
use crate::extract::ApiJson;
use crate::models::{CartItem, CartItemWithProduct, NewCartItem};
use crate::state::AppState;
use crate::store::{CartRepository, MemStore, ProductRepository};
use crate::validation::{Validate, ValidationErrors};

impl Validate for NewCartItem {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(self.quantity >= 1, "quantity", "must be at least 1");
        errors.into_result()
    }
}

/// Body of `PUT /api/cart/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantity {
    pub quantity: u32,
}

impl Validate for UpdateQuantity {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(self.quantity >= 1, "quantity", "must be at least 1");
        errors.into_result()
    }
}

/// Reject a line whose product is not in the catalog.
pub(super) fn ensure_product(store: &MemStore, product_id: ProductId, field: &str) -> Result<()> {
    if ProductRepository::new(store).get(product_id)?.is_none() {
        return Err(ValidationErrors::single(field, "unknown product").into());
    }
    Ok(())
}

/// A user's cart, each row with its product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<CartItemWithProduct>>> {
    let items = match parse_id::<UserId>(&user_id) {
        Some(user_id) => CartRepository::new(state.store()).items_for_user(user_id)?,
        None => Vec::new(),
    };
    Ok(Json(items))
}

/// Add a product to a cart, accumulating onto an existing row.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewCartItem>,
) -> Result<Json<CartItem>> {
    new.validate()?;
    ensure_product(state.store(), new.product_id, "productId")?;

    let item = CartRepository::new(state.store()).add(new)?;
    tracing::debug!(cart_item_id = %item.id, quantity = item.quantity, "Cart updated");
    Ok(Json(item))
}

/// Set a row's quantity. Succeeds even if the row is gone.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateQuantity>,
) -> Result<Json<Success>> {
    body.validate()?;
    if let Some(id) = parse_id::<CartItemId>(&id) {
        CartRepository::new(state.store()).update_quantity(id, body.quantity)?;
    }
    Ok(Json(Success::OK))
}

/// Remove one cart row.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Success>> {
    if let Some(id) = parse_id::<CartItemId>(&id) {
        CartRepository::new(state.store()).remove(id)?;
    }
    Ok(Json(Success::OK))
}

/// Empty a user's cart.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Success>> {
    if let Some(user_id) = parse_id::<UserId>(&user_id) {
        CartRepository::new(state.store()).clear(user_id)?;
    }
    Ok(Json(Success::OK))
}
