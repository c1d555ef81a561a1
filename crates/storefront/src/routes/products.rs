//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use karigar_core::{CategoryId, ProductId};

use super::parse_id;
use crate::error::{AppError, Result};
use crate::extract::ApiQuery;
use crate::models::{Product, ProductFilter};
use crate::state::AppState;
use crate::store::ProductRepository;
use crate::validation::ValidationErrors;

/// Listing query parameters.
///
/// `page` is 1-based; a page below 1 is treated as the first page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQuery {
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ProductsQuery {
    /// Resolve the query into repository filters.
    ///
    /// Empty `categoryId` and `search` values mean "no filter". A
    /// whitespace-only `search` is kept and matches literally.
    ///
    /// # Errors
    ///
    /// Returns a field error if `categoryId` is present but not a UUID.
    pub fn into_filter(self) -> std::result::Result<ProductFilter, ValidationErrors> {
        let category_id = match self.category_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<CategoryId>().map_err(|_| {
                ValidationErrors::single("categoryId", "must be a category identifier")
            })?),
        };
        let search = self.search.filter(|s| !s.is_empty());

        // Offset steps by the limit as given; only an absent limit means 12.
        let page = self.page.unwrap_or(1).max(1);
        let step = self.limit.unwrap_or(ProductFilter::DEFAULT_LIMIT);
        let offset = (page - 1).saturating_mul(step);

        Ok(ProductFilter {
            category_id,
            search,
            limit: self.limit,
            offset,
        })
    }
}

/// List active products, filtered and paginated.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductsQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = query.into_filter()?;
    Ok(Json(ProductRepository::new(state.store()).list(&filter)?))
}

/// The featured products.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(ProductRepository::new(state.store()).featured()?))
}

/// Get one product.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let product = match parse_id::<ProductId>(&id) {
        Some(id) => ProductRepository::new(state.store()).get(id)?,
        None => None,
    };
    product
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
