//! Wishlist repository.

use chrono::Utc;

use karigar_core::{ProductId, UserId, WishlistItemId};

use super::{MemStore, RepositoryError, read, write};
use crate::models::{NewWishlistItem, WishlistItem, WishlistItemWithProduct};

/// Repository for wishlist rows.
///
/// Unlike the cart, adding a pair that is already present creates a second
/// row.
pub struct WishlistRepository<'a> {
    store: &'a MemStore,
}

impl<'a> WishlistRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// A user's wishlist rows, oldest first, each joined with its product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DanglingReference` if a row's product has
    /// been deleted.
    pub fn items_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<WishlistItemWithProduct>, RepositoryError> {
        let products = read(&self.store.products, "products")?;
        let items = read(&self.store.wishlist_items, "wishlist_items")?;

        items
            .values()
            .filter(|item| item.user_id == user_id)
            .map(|item| {
                let product = products
                    .get(&item.product_id)
                    .ok_or_else(|| RepositoryError::dangling("product", item.product_id))?;
                Ok(WishlistItemWithProduct {
                    item: item.clone(),
                    product: product.clone(),
                })
            })
            .collect()
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn add(&self, new: NewWishlistItem) -> Result<WishlistItem, RepositoryError> {
        let mut items = write(&self.store.wishlist_items, "wishlist_items")?;

        if items
            .values()
            .any(|item| item.user_id == new.user_id && item.product_id == new.product_id)
        {
            tracing::warn!(
                user_id = %new.user_id,
                product_id = %new.product_id,
                "Product already on wishlist; adding duplicate row"
            );
        }

        let item = WishlistItem {
            id: WishlistItemId::generate(),
            user_id: new.user_id,
            product_id: new.product_id,
            created_at: Utc::now(),
        };
        items.insert(item.id, item.clone());
        Ok(item)
    }

    /// Remove the oldest row for (user, product). No-op if there is none.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn remove(&self, user_id: UserId, product_id: ProductId) -> Result<(), RepositoryError> {
        let mut items = write(&self.store.wishlist_items, "wishlist_items")?;
        let first = items
            .values()
            .find(|item| item.user_id == user_id && item.product_id == product_id)
            .map(|item| item.id);
        if let Some(id) = first {
            items.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::test_support::{
        create_artisan, create_category, create_product, create_user,
    };

    fn setup(store: &MemStore) -> NewWishlistItem {
        let category = create_category(store, "jewelry");
        let artisan = create_artisan(store, "arjun");
        let product = create_product(store, "Kundan Necklace", &category, &artisan);
        let user = create_user(store, "meera");
        NewWishlistItem {
            user_id: user.id,
            product_id: product.id,
        }
    }

    #[test]
    fn test_add_twice_keeps_both_rows() {
        let store = MemStore::new();
        let new = setup(&store);
        let repo = WishlistRepository::new(&store);

        let a = repo.add(new.clone()).unwrap();
        let b = repo.add(new.clone()).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.items_for_user(new.user_id).unwrap().len(), 2);
    }

    #[test]
    fn test_remove_deletes_first_match_only() {
        let store = MemStore::new();
        let new = setup(&store);
        let repo = WishlistRepository::new(&store);

        let first = repo.add(new.clone()).unwrap();
        let second = repo.add(new.clone()).unwrap();

        repo.remove(new.user_id, new.product_id).unwrap();

        let remaining = repo.items_for_user(new.user_id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].item.id, second.id);
        assert_ne!(remaining[0].item.id, first.id);
    }

    #[test]
    fn test_remove_missing_pair_is_noop() {
        let store = MemStore::new();
        let new = setup(&store);
        let repo = WishlistRepository::new(&store);

        repo.remove(new.user_id, new.product_id).unwrap();
        repo.remove(UserId::generate(), ProductId::generate())
            .unwrap();
        assert!(repo.items_for_user(new.user_id).unwrap().is_empty());
    }

    #[test]
    fn test_items_are_joined_with_product() {
        let store = MemStore::new();
        let new = setup(&store);
        let repo = WishlistRepository::new(&store);
        repo.add(new.clone()).unwrap();

        let items = repo.items_for_user(new.user_id).unwrap();
        assert_eq!(items[0].product.id, new.product_id);
        assert_eq!(items[0].product.name, "Kundan Necklace");
    }
}
