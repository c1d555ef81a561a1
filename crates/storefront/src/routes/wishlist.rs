//! Wishlist route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use karigar_core::{ProductId, UserId};

use super::{cart::ensure_product, parse_id};
use crate::error::{Result, Success};
use crate::extract::ApiJson;
use crate::models::{NewWishlistItem, WishlistItem, WishlistItemWithProduct};
use crate::state::AppState;
use crate::store::WishlistRepository;

/// A user's wishlist, each row with its product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WishlistItemWithProduct>>> {
    let items = match parse_id::<UserId>(&user_id) {
        Some(user_id) => WishlistRepository::new(state.store()).items_for_user(user_id)?,
        None => Vec::new(),
    };
    Ok(Json(items))
}

/// Save a product to a wishlist.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewWishlistItem>,
) -> Result<Json<WishlistItem>> {
    ensure_product(state.store(), new.product_id, "productId")?;
    Ok(Json(WishlistRepository::new(state.store()).add(new)?))
}

/// Remove a product from a wishlist.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> Result<Json<Success>> {
    if let (Some(user_id), Some(product_id)) = (
        parse_id::<UserId>(&user_id),
        parse_id::<ProductId>(&product_id),
    ) {
        WishlistRepository::new(state.store()).remove(user_id, product_id)?;
    }
    Ok(Json(Success::OK))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use super::*;
    use crate::routes::test_support::{get, post, send, seeded_app};

    #[tokio::test]
    async fn test_add_list_remove() {
        let (app, _) = seeded_app();
        let user_id = UserId::generate();
        let (_, products) = get(&app, "/api/products").await;
        let product_id = products[3]["id"].as_str().unwrap();

        let (status, item) = post(
            &app,
            "/api/wishlist",
            json!({ "userId": user_id, "productId": product_id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["productId"], product_id);

        let (status, list) = get(&app, &format!("/api/wishlist/{user_id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list[0]["product"]["name"], "Madhubani Folk Art Painting");

        let (status, body) = send(
            &app,
            Method::DELETE,
            &format!("/api/wishlist/{user_id}/{product_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (_, list) = get(&app, &format!("/api/wishlist/{user_id}")).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_duplicate_adds_are_removed_one_at_a_time() {
        let (app, _) = seeded_app();
        let user_id = UserId::generate();
        let (_, products) = get(&app, "/api/products").await;
        let product_id = products[0]["id"].as_str().unwrap();
        let body = json!({ "userId": user_id, "productId": product_id });

        post(&app, "/api/wishlist", body.clone()).await;
        post(&app, "/api/wishlist", body).await;
        let (_, list) = get(&app, &format!("/api/wishlist/{user_id}")).await;
        assert_eq!(list.as_array().unwrap().len(), 2);

        send(
            &app,
            Method::DELETE,
            &format!("/api/wishlist/{user_id}/{product_id}"),
            None,
        )
        .await;
        let (_, list) = get(&app, &format!("/api/wishlist/{user_id}")).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_product_rejected() {
        let (app, _) = seeded_app();
        let (status, body) = post(
            &app,
            "/api/wishlist",
            json!({ "userId": UserId::generate(), "productId": ProductId::generate() }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "productId");
    }

    #[tokio::test]
    async fn test_remove_missing_is_success() {
        let (app, _) = seeded_app();
        let (status, _) = send(&app, Method::DELETE, "/api/wishlist/nobody/nothing", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
