//! Order repository.

use chrono::Utc;

use karigar_core::{OrderId, OrderItemId, UserId};

use super::{MemStore, RepositoryError, read, write};
use crate::models::{NewOrder, NewOrderItem, Order, OrderItem};

/// Repository for orders and their line items.
pub struct OrderRepository<'a> {
    store: &'a MemStore,
}

impl<'a> OrderRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn create_order(&self, new: NewOrder) -> Result<Order, RepositoryError> {
        let order = Order {
            id: OrderId::generate(),
            user_id: new.user_id,
            status: new.status,
            total_amount: new.total_amount,
            shipping_address: new.shipping_address,
            payment_status: new.payment_status,
            created_at: Utc::now(),
        };
        write(&self.store.orders, "orders")?.insert(order.id, order.clone());
        Ok(order)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn create_item(&self, new: NewOrderItem) -> Result<OrderItem, RepositoryError> {
        let item = OrderItem {
            id: OrderItemId::generate(),
            order_id: new.order_id,
            product_id: new.product_id,
            quantity: new.quantity,
            price: new.price,
        };
        write(&self.store.order_items, "order_items")?.insert(item.id, item.clone());
        Ok(item)
    }

    /// A user's orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn user_orders(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = read(&self.store.orders, "orders")?;
        Ok(orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn order_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = read(&self.store.order_items, "order_items")?;
        Ok(items
            .values()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }
}
