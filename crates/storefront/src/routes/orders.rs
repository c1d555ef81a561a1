//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use karigar_core::{OrderStatus, PaymentStatus, Price, ProductId, UserId};

use super::parse_id;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{NewOrder, NewOrderItem, OrderWithItems};
use crate::state::AppState;
use crate::store::{OrderRepository, ProductRepository};
use crate::validation::{Validate, ValidationErrors};

/// Body of `POST /api/orders`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub total_amount: Price,
    pub shipping_address: serde_json::Value,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderLineRequest>,
}

/// One line of a new order. `price` is the unit price charged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Price,
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(!self.items.is_empty(), "items", "must contain at least one line");
        for (index, line) in self.items.iter().enumerate() {
            errors.check(
                line.quantity >= 1,
                format!("items[{index}].quantity"),
                "must be at least 1",
            );
        }
        errors.into_result()
    }
}

/// Place an order and record its lines.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderRequest>,
) -> Result<Json<OrderWithItems>> {
    request.validate()?;

    let products = ProductRepository::new(state.store());
    let mut unknown = ValidationErrors::new();
    for (index, line) in request.items.iter().enumerate() {
        if products.get(line.product_id)?.is_none() {
            unknown.add(format!("items[{index}].productId"), "unknown product");
        }
    }
    unknown.into_result()?;

    let orders = OrderRepository::new(state.store());
    let order = orders.create_order(NewOrder {
        user_id: request.user_id,
        status: request.status,
        total_amount: request.total_amount,
        shipping_address: request.shipping_address,
        payment_status: request.payment_status,
    })?;

    let items = request
        .items
        .into_iter()
        .map(|line| {
            orders.create_item(NewOrderItem {
                order_id: order.id,
                product_id: line.product_id,
                quantity: line.quantity,
                price: line.price,
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::info!(
        order_id = %order.id,
        user_id = %order.user_id,
        lines = items.len(),
        total = %order.total_amount,
        "Order placed"
    );

    Ok(Json(OrderWithItems { order, items }))
}

/// A user's orders, oldest first, each with its lines.
#[instrument(skip(state))]
pub async fn for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<OrderWithItems>>> {
    let Some(user_id) = parse_id::<UserId>(&user_id) else {
        return Ok(Json(Vec::new()));
    };

    let repo = OrderRepository::new(state.store());
    let orders = repo
        .user_orders(user_id)?
        .into_iter()
        .map(|order| {
            let items = repo.order_items(order.id)?;
            Ok(OrderWithItems { order, items })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Json(orders))
}
