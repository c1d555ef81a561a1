//! JSON API route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/categories                        - All categories
//! GET    /api/categories/{id}                   - One category
//!
//! GET    /api/products?categoryId&search&page&limit - Active products
//! GET    /api/products/featured                 - First 12 products
//! GET    /api/products/{id}                     - One product
//! GET    /api/products/{id}/reviews             - Reviews with authors
//!
//! GET    /api/artisans/featured                 - First 6 artisans with users
//! GET    /api/artisans/{id}                     - One artisan
//! GET    /api/artisans/{id}/products            - An artisan's products
//!
//! POST   /api/auth/register                     - Create account
//! POST   /api/auth/login                        - Password login
//!
//! GET    /api/cart/{userId}                     - Cart rows with products
//! POST   /api/cart                              - Add (accumulates quantity)
//! PUT    /api/cart/{id}                         - Set quantity
//! DELETE /api/cart/{id}                         - Remove row
//! DELETE /api/cart/user/{userId}                - Clear cart
//!
//! GET    /api/wishlist/{userId}                 - Wishlist rows with products
//! POST   /api/wishlist                          - Add
//! DELETE /api/wishlist/{userId}/{productId}     - Remove first matching row
//!
//! POST   /api/orders                            - Place order with lines
//! GET    /api/orders/{userId}                   - A user's orders with lines
//!
//! POST   /api/reviews                           - Review a product
//! ```
//!
//! Path identifiers that are not UUIDs cannot name any row, so they behave
//! like unknown identifiers: 404 for single lookups, empty lists, and
//! successful no-op deletes.

pub mod artisans;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod test_support;

use std::str::FromStr;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{id}", get(categories::show))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
        .route("/{id}", get(products::show))
        .route("/{id}/reviews", get(reviews::for_product))
}

/// Create the artisan routes router.
pub fn artisan_routes() -> Router<AppState> {
    Router::new()
        .route("/featured", get(artisans::featured))
        .route("/{id}", get(artisans::show))
        .route("/{id}/products", get(artisans::products))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(cart::add))
        .route("/{id}", get(cart::show).put(cart::update).delete(cart::remove))
        .route("/user/{user_id}", delete(cart::clear))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(wishlist::add))
        .route("/{user_id}", get(wishlist::show))
        .route("/{user_id}/{product_id}", delete(wishlist::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/{user_id}", get(orders::for_user))
}

/// Create all `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category_routes())
        .nest("/products", product_routes())
        .nest("/artisans", artisan_routes())
        .nest("/auth", auth_routes())
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .nest("/orders", order_routes())
        .route("/reviews", post(reviews::create))
}

/// Parse a path identifier; malformed input names no row.
fn parse_id<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}
