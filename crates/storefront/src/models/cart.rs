//! Cart and wishlist rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use karigar_core::{CartItemId, ProductId, UserId, WishlistItemId};

use super::Product;

/// One product line in a user's cart.
///
/// There is at most one row per (user, product) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`CartItem`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A cart row joined with its product.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Product,
}

/// A saved-for-later product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: WishlistItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`WishlistItem`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWishlistItem {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// A wishlist row joined with its product.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistItemWithProduct {
    #[serde(flatten)]
    pub item: WishlistItem,
    pub product: Product,
}
