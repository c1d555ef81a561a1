//! Domain models for the storefront.
//!
//! Each entity has a stored shape (returned to clients) and an insert shape
//! (`New*`) that omits server-owned fields: identifiers, timestamps, and
//! aggregates such as ratings. Joined projections (`*With*`) flatten the
//! row and embed the related entity, matching the JSON the client expects.

pub mod artisan;
pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use artisan::{Artisan, ArtisanWithUser, NewArtisan};
pub use cart::{
    CartItem, CartItemWithProduct, NewCartItem, NewWishlistItem, WishlistItem,
    WishlistItemWithProduct,
};
pub use category::{Category, NewCategory};
pub use order::{
    NewOrder, NewOrderItem, NewReview, Order, OrderItem, OrderWithItems, Review, ReviewWithUser,
};
pub use product::{NewProduct, Product, ProductFilter, ProductPatch};
pub use user::{NewUser, User};
