//! Artisan route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use karigar_core::ArtisanId;

use super::parse_id;
use crate::error::{AppError, Result};
use crate::models::{Artisan, ArtisanWithUser, Product};
use crate::state::AppState;
use crate::store::{ArtisanRepository, ProductRepository};

/// The featured artisans, each with its user account.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<ArtisanWithUser>>> {
    Ok(Json(ArtisanRepository::new(state.store()).featured()?))
}

/// Get one artisan profile.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Artisan>> {
    let artisan = match parse_id::<ArtisanId>(&id) {
        Some(id) => ArtisanRepository::new(state.store()).get(id)?,
        None => None,
    };
    artisan
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Artisan not found".to_string()))
}

/// Every product an artisan has listed, including inactive ones.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = match parse_id::<ArtisanId>(&id) {
        Some(id) => ProductRepository::new(state.store()).by_artisan(id)?,
        None => Vec::new(),
    };
    Ok(Json(products))
}
