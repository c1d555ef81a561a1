//! Cart repository.

use chrono::Utc;

use karigar_core::{CartItemId, UserId};

use super::{MemStore, RepositoryError, read, write};
use crate::models::{CartItem, CartItemWithProduct, NewCartItem};

/// Repository for cart rows.
///
/// Holds at most one row per (user, product) pair; adding an existing pair
/// accumulates its quantity.
pub struct CartRepository<'a> {
    store: &'a MemStore,
}

impl<'a> CartRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// A user's cart rows, oldest first, each joined with its product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DanglingReference` if a row's product has
    /// been deleted.
    pub fn items_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CartItemWithProduct>, RepositoryError> {
        let products = read(&self.store.products, "products")?;
        let items = read(&self.store.cart_items, "cart_items")?;

        items
            .values()
            .filter(|item| item.user_id == user_id)
            .map(|item| {
                let product = products
                    .get(&item.product_id)
                    .ok_or_else(|| RepositoryError::dangling("product", item.product_id))?;
                Ok(CartItemWithProduct {
                    item: item.clone(),
                    product: product.clone(),
                })
            })
            .collect()
    }

    /// Add a product to a cart.
    ///
    /// If the user already has a row for the product, its quantity is
    /// increased by `new.quantity` and the updated row is returned.
    /// Otherwise a new row is created.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn add(&self, new: NewCartItem) -> Result<CartItem, RepositoryError> {
        let mut items = write(&self.store.cart_items, "cart_items")?;

        if let Some(existing) = items
            .values_mut()
            .find(|item| item.user_id == new.user_id && item.product_id == new.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(new.quantity);
            return Ok(existing.clone());
        }

        let item = CartItem {
            id: CartItemId::generate(),
            user_id: new.user_id,
            product_id: new.product_id,
            quantity: new.quantity,
            created_at: Utc::now(),
        };
        items.insert(item.id, item.clone());
        Ok(item)
    }

    /// Overwrite a row's quantity. Returns `None` if the row does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn update_quantity(
        &self,
        id: CartItemId,
        quantity: u32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut items = write(&self.store.cart_items, "cart_items")?;
        Ok(items.get_mut(&id).map(|item| {
            item.quantity = quantity;
            item.clone()
        }))
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn remove(&self, id: CartItemId) -> Result<(), RepositoryError> {
        write(&self.store.cart_items, "cart_items")?.remove(&id);
        Ok(())
    }

    /// Remove every row belonging to a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        write(&self.store.cart_items, "cart_items")?.retain(|item| item.user_id != user_id);
        Ok(())
    }
}
