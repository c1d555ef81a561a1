//! Review route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use karigar_core::ProductId;

use super::{cart::ensure_product, parse_id};
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{NewReview, Review, ReviewWithUser};
use crate::state::AppState;
use crate::store::{ReviewRepository, UserRepository};
use crate::validation::{Validate, ValidationErrors};

const MIN_STARS: u8 = 1;
const MAX_STARS: u8 = 5;

impl Validate for NewReview {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            (MIN_STARS..=MAX_STARS).contains(&self.rating),
            "rating",
            format!("must be between {MIN_STARS} and {MAX_STARS}"),
        );
        errors.into_result()
    }
}

/// A product's reviews with their authors.
#[instrument(skip(state))]
pub async fn for_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ReviewWithUser>>> {
    let reviews = match parse_id::<ProductId>(&id) {
        Some(id) => ReviewRepository::new(state.store()).product_reviews(id)?,
        None => Vec::new(),
    };
    Ok(Json(reviews))
}

/// Review a product.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewReview>,
) -> Result<Json<Review>> {
    new.validate()?;
    ensure_product(state.store(), new.product_id, "productId")?;
    if UserRepository::new(state.store()).get(new.user_id)?.is_none() {
        return Err(ValidationErrors::single("userId", "unknown user").into());
    }

    let review = ReviewRepository::new(state.store()).create(new)?;
    tracing::info!(review_id = %review.id, product_id = %review.product_id, "Review posted");
    Ok(Json(review))
}
