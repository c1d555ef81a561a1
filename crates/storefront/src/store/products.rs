//! Product repository: catalog listing, search, and featured products.

use chrono::Utc;

use karigar_core::{ArtisanId, ProductId, Rating};

use super::{MemStore, RepositoryError, read, write};
use crate::models::{NewProduct, Product, ProductFilter, ProductPatch};

/// Number of products returned by [`ProductRepository::featured`].
pub const FEATURED_PRODUCT_COUNT: usize = 12;

/// Repository for catalog products.
pub struct ProductRepository<'a> {
    store: &'a MemStore,
}

impl<'a> ProductRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// List active products matching `filter`, in insertion order.
    ///
    /// The category must match exactly; the search term is matched
    /// case-insensitively as a substring of the name or description. The
    /// window `[offset, offset + limit)` is taken after filtering, so an
    /// offset past the end yields an empty page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let needle = filter
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let products = read(&self.store.products, "products")?;
        Ok(products
            .values()
            .filter(|p| p.is_active)
            .filter(|p| filter.category_id.is_none_or(|id| p.category_id == id))
            .filter(|p| needle.as_deref().is_none_or(|n| matches_search(p, n)))
            .skip(filter.offset)
            .take(filter.effective_limit())
            .cloned()
            .collect())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(read(&self.store.products, "products")?.get(&id).cloned())
    }

    /// Every product listed by an artisan, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn by_artisan(&self, artisan_id: ArtisanId) -> Result<Vec<Product>, RepositoryError> {
        let products = read(&self.store.products, "products")?;
        Ok(products
            .values()
            .filter(|p| p.artisan_id == artisan_id)
            .cloned()
            .collect())
    }

    /// The first [`FEATURED_PRODUCT_COUNT`] products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn featured(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = read(&self.store.products, "products")?;
        Ok(products
            .values()
            .take(FEATURED_PRODUCT_COUNT)
            .cloned()
            .collect())
    }

    /// Create a product with no rating and no reviews.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn create(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        let product = Product {
            id: ProductId::generate(),
            name: new.name,
            description: new.description,
            price: new.price,
            original_price: new.original_price,
            images: new.images,
            category_id: new.category_id,
            artisan_id: new.artisan_id,
            stock: new.stock,
            rating: Rating::ZERO,
            review_count: 0,
            is_active: new.is_active,
            tags: new.tags,
            created_at: Utc::now(),
        };
        write(&self.store.products, "products")?.insert(product.id, product.clone());
        Ok(product)
    }

    /// Apply `patch` to a product. Returns the updated product, or `None`
    /// when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut products = write(&self.store.products, "products")?;
        Ok(products.get_mut(&id).map(|product| {
            patch.apply(product);
            product.clone()
        }))
    }

    /// Delete a product. Rows referencing it are left in place.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        if write(&self.store.products, "products")?.remove(&id).is_some() {
            tracing::debug!(product_id = %id, "Deleted product");
        }
        Ok(())
    }
}

/// `needle` must already be lowercase.
fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}
