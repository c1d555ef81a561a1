//! In-memory storage for the storefront.
//!
//! # Layout
//!
//! [`MemStore`] owns one insertion-ordered [`Table`] per entity kind, each
//! behind its own `RwLock`. Repositories borrow the store and expose the
//! per-entity operations:
//!
//! - [`UserRepository`] - accounts, lookup by email
//! - [`ArtisanRepository`] - artisan profiles, featured artisans
//! - [`CategoryRepository`] - categories
//! - [`ProductRepository`] - catalog listing, search, featured products
//! - [`CartRepository`] - cart rows with quantity accumulation
//! - [`WishlistRepository`] - wishlist rows
//! - [`OrderRepository`] - orders and order lines
//! - [`ReviewRepository`] - product reviews
//!
//! # Semantics
//!
//! Absence is never an error: point lookups return `Option`, listings return
//! empty vectors, updates and deletes of missing rows are silent no-ops.
//! Errors are reserved for a poisoned lock, a uniqueness conflict, or a join
//! that finds a referenced row missing ([`RepositoryError::DanglingReference`]).
//!
//! Every mutating operation holds its table's write lock for its whole
//! read-modify-write, so concurrent requests observe a total order per table.
//! Operations that touch two tables acquire their locks in the order the
//! fields are declared on [`MemStore`].
//!
//! There is no cascading delete. Removing a product leaves cart, wishlist,
//! order, and review rows pointing at it; joins over such rows report a
//! dangling reference.

mod artisans;
mod cart;
mod categories;
mod orders;
mod products;
mod reviews;
pub mod seed;
pub mod table;
mod users;
mod wishlist;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use karigar_core::{
    ArtisanId, CartItemId, CategoryId, OrderId, OrderItemId, ProductId, ReviewId, UserId,
    WishlistItemId,
};

use crate::models::{
    Artisan, CartItem, Category, Order, OrderItem, Product, Review, User, WishlistItem,
};

pub use artisans::ArtisanRepository;
pub use cart::CartRepository;
pub use categories::CategoryRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use reviews::ReviewRepository;
pub use seed::{SeedError, SeedSummary};
pub use table::Table;
pub use users::UserRepository;
pub use wishlist::WishlistRepository;

/// Errors returned by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A writer panicked while holding a table lock.
    #[error("lock poisoned on {0} table")]
    LockPoisoned(&'static str),

    /// Uniqueness constraint violation (e.g., duplicate email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A row references another row that no longer exists.
    #[error("dangling reference to {entity} {id}")]
    DanglingReference {
        /// Kind of the missing row.
        entity: &'static str,
        /// Identifier the referencing row points at.
        id: String,
    },
}

impl RepositoryError {
    pub(crate) fn dangling(entity: &'static str, id: impl ToString) -> Self {
        Self::DanglingReference {
            entity,
            id: id.to_string(),
        }
    }
}

/// Process-wide in-memory store.
///
/// Construct once at startup and share it through application state.
#[derive(Debug, Default)]
pub struct MemStore {
    pub(crate) users: RwLock<Table<UserId, User>>,
    pub(crate) artisans: RwLock<Table<ArtisanId, Artisan>>,
    pub(crate) categories: RwLock<Table<CategoryId, Category>>,
    pub(crate) products: RwLock<Table<ProductId, Product>>,
    pub(crate) cart_items: RwLock<Table<CartItemId, CartItem>>,
    pub(crate) wishlist_items: RwLock<Table<WishlistItemId, WishlistItem>>,
    pub(crate) orders: RwLock<Table<OrderId, Order>>,
    pub(crate) order_items: RwLock<Table<OrderItemId, OrderItem>>,
    pub(crate) reviews: RwLock<Table<ReviewId, Review>>,
}

impl MemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the demo catalog.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if a fixture row cannot be inserted.
    pub fn seeded() -> Result<Self, SeedError> {
        let store = Self::new();
        let summary = seed::seed(&store)?;
        tracing::info!(
            categories = summary.categories,
            artisans = summary.artisans,
            products = summary.products,
            "Seeded demo catalog"
        );
        Ok(store)
    }
}

/// Acquire a read guard, mapping poisoning to [`RepositoryError::LockPoisoned`].
pub(crate) fn read<'a, T>(
    lock: &'a RwLock<T>,
    table: &'static str,
) -> Result<RwLockReadGuard<'a, T>, RepositoryError> {
    lock.read().map_err(|_| RepositoryError::LockPoisoned(table))
}

/// Acquire a write guard, mapping poisoning to [`RepositoryError::LockPoisoned`].
pub(crate) fn write<'a, T>(
    lock: &'a RwLock<T>,
    table: &'static str,
) -> Result<RwLockWriteGuard<'a, T>, RepositoryError> {
    lock.write().map_err(|_| RepositoryError::LockPoisoned(table))
}
