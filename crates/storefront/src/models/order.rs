//! Orders, order lines, and product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use karigar_core::{
    OrderId, OrderItemId, OrderStatus, PaymentStatus, Price, ProductId, ReviewId, UserId,
};

use super::User;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub total_amount: Price,
    /// Free-form address document as submitted by the client.
    pub shipping_address: serde_json::Value,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`Order`].
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub status: OrderStatus,
    pub total_amount: Price,
    pub shipping_address: serde_json::Value,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price at the time of purchase.
    pub price: Price,
}

/// Insert shape for [`OrderItem`].
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Price,
}

/// An order together with its lines.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Whole stars, 1 to 5.
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`Review`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A review joined with the account that wrote it.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithUser {
    #[serde(flatten)]
    pub review: Review,
    pub user: User,
}
