//! Catalog products.

use chrono::{DateTime, Utc};
use serde::Serialize;

use karigar_core::{ArtisanId, CategoryId, Price, ProductId, Rating};

/// A product listed by an artisan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Pre-discount price shown struck through by the client.
    pub original_price: Option<Price>,
    /// Image URIs in display order; the first is the cover image.
    pub images: Vec<String>,
    pub category_id: CategoryId,
    pub artisan_id: ArtisanId,
    pub stock: u32,
    pub rating: Rating,
    pub review_count: u32,
    pub is_active: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`Product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub original_price: Option<Price>,
    pub images: Vec<String>,
    pub category_id: CategoryId,
    pub artisan_id: ArtisanId,
    pub stock: u32,
    pub is_active: bool,
    pub tags: Vec<String>,
}

/// Partial update for a [`Product`]. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub original_price: Option<Option<Price>>,
    pub stock: Option<u32>,
    pub is_active: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl ProductPatch {
    /// Apply the set fields to `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        if let Some(tags) = self.tags {
            product.tags = tags;
        }
    }
}

/// Listing filters for [`ProductRepository::list`](crate::store::ProductRepository::list).
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
    /// Page size; `None` or `Some(0)` means [`ProductFilter::DEFAULT_LIMIT`].
    pub limit: Option<usize>,
    pub offset: usize,
}

impl ProductFilter {
    pub const DEFAULT_LIMIT: usize = 12;

    /// The page size this filter resolves to.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        match self.limit {
            None | Some(0) => Self::DEFAULT_LIMIT,
            Some(limit) => limit,
        }
    }
}
