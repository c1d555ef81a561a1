//! Demo catalog loaded at startup.
//!
//! Seven categories, five artisans with their user accounts, and six
//! products. Product `i` belongs to artisan `i % 5`. Counters such as stock,
//! sales, and review counts are randomized on every start.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;

use karigar_core::{
    ArtisanId, CategoryId, Email, EmailError, Price, ProductId, Rating, RatingError, UserRole,
};

use super::{MemStore, RepositoryError, UserRepository, write};
use crate::models::{Artisan, Category, NewUser, Product};

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("Pottery", "Traditional clay crafts", "fas fa-vase", "pottery"),
    ("Textiles", "Handwoven fabrics", "fas fa-tshirt", "textiles"),
    ("Jewelry", "Traditional ornaments", "fas fa-gem", "jewelry"),
    ("Paintings", "Traditional art", "fas fa-paint-brush", "paintings"),
    ("Home Decor", "Decorative items", "fas fa-home", "home-decor"),
    ("Kitchenware", "Copper & brass items", "fas fa-utensils", "kitchenware"),
    ("Handicrafts", "Miscellaneous crafts", "fas fa-scroll", "handicrafts"),
];

/// (first name, last name, specialization, location, rating in tenths)
const ARTISANS: &[(&str, &str, &str, &str, i64)] = &[
    ("Ramesh", "Kumar", "Master Potter", "Rajasthan", 49),
    ("Priya", "Devi", "Textile Weaver", "Gujarat", 48),
    ("Arjun", "Sharma", "Jewelry Artisan", "Jaipur", 50),
    ("Sunita", "Kumari", "Folk Artist", "Bihar", 49),
    ("Vikram", "Singh", "Metal Craftsman", "Rajasthan", 47),
];

/// (name, price, original price, category slug)
const PRODUCTS: &[(&str, u32, u32, &str)] = &[
    ("Traditional Blue Pottery Vase", 2499, 3199, "pottery"),
    ("Handwoven Banarasi Silk Saree", 12999, 15999, "textiles"),
    ("Rajasthani Kundan Necklace Set", 8499, 9999, "jewelry"),
    ("Madhubani Folk Art Painting", 3799, 4299, "paintings"),
    ("Brass Decorative Diya Set", 1899, 2399, "home-decor"),
    ("Copper Water Bottle Set", 1299, 1699, "kitchenware"),
];

const PRODUCT_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
    "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
];

const PRODUCT_TAGS: [&str; 3] = ["handmade", "traditional", "authentic"];

/// Errors raised while loading the demo catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("invalid seed email: {0}")]
    Email(#[from] EmailError),

    #[error("invalid seed rating: {0}")]
    Rating(#[from] RatingError),

    #[error("seed product references unknown category '{0}'")]
    UnknownCategory(&'static str),
}

/// Row counts inserted by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub artisans: usize,
    pub products: usize,
}

/// Load the demo catalog into `store`.
///
/// # Errors
///
/// Returns `SeedError` if a fixture row is invalid or a user already exists.
pub fn seed(store: &MemStore) -> Result<SeedSummary, SeedError> {
    let mut rng = rand::rng();

    let categories = seed_categories(store, &mut rng)?;
    let artisans = seed_artisans(store, &mut rng)?;

    let mut products = write(&store.products, "products")?;
    // Products are dealt to artisans round-robin.
    for ((name, price, original, slug), artisan_id) in
        PRODUCTS.iter().zip(artisans.iter().cycle())
    {
        let category_id = categories
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, id)| *id)
            .ok_or(SeedError::UnknownCategory(*slug))?;

        let product = Product {
            id: ProductId::generate(),
            name: (*name).to_string(),
            description: format!(
                "Beautiful handcrafted {} made with traditional techniques and premium materials.",
                name.to_lowercase()
            ),
            price: Price::from_rupees(*price),
            original_price: Some(Price::from_rupees(*original)),
            images: PRODUCT_IMAGES.iter().map(ToString::to_string).collect(),
            category_id,
            artisan_id: *artisan_id,
            stock: rng.random_range(10..60),
            rating: Rating::new(Decimal::new(rng.random_range(45..=50), 1))?,
            review_count: rng.random_range(10..110),
            is_active: true,
            tags: PRODUCT_TAGS.iter().map(ToString::to_string).collect(),
            created_at: Utc::now(),
        };
        products.insert(product.id, product);
    }

    Ok(SeedSummary {
        categories: categories.len(),
        artisans: artisans.len(),
        products: products.len(),
    })
}

fn seed_categories(
    store: &MemStore,
    rng: &mut impl Rng,
) -> Result<Vec<(&'static str, CategoryId)>, SeedError> {
    let mut table = write(&store.categories, "categories")?;
    let mut inserted = Vec::with_capacity(CATEGORIES.len());

    for (name, description, icon, slug) in CATEGORIES {
        let category = Category {
            id: CategoryId::generate(),
            name: (*name).to_string(),
            description: Some((*description).to_string()),
            icon: (*icon).to_string(),
            slug: (*slug).to_string(),
            product_count: rng.random_range(50..250),
        };
        inserted.push((*slug, category.id));
        table.insert(category.id, category);
    }
    Ok(inserted)
}

fn seed_artisans(store: &MemStore, rng: &mut impl Rng) -> Result<Vec<ArtisanId>, SeedError> {
    let users = UserRepository::new(store);
    let mut inserted = Vec::with_capacity(ARTISANS.len());

    for (first, last, specialization, location, rating_tenths) in ARTISANS {
        let first_lower = first.to_lowercase();
        let last_lower = last.to_lowercase();
        let user = users.create(NewUser {
            username: format!("{first_lower}_{last_lower}"),
            email: Email::parse(&format!("{first_lower}.{last_lower}@example.com"))?,
            password_hash: None,
            first_name: (*first).to_string(),
            last_name: (*last).to_string(),
            role: UserRole::Artisan,
        })?;

        let artisan = Artisan {
            id: ArtisanId::generate(),
            user_id: user.id,
            bio: Some(format!(
                "{specialization} with years of experience in traditional techniques."
            )),
            specialization: (*specialization).to_string(),
            location: (*location).to_string(),
            rating: Rating::new(Decimal::new(*rating_tenths, 1))?,
            total_sales: rng.random_range(100..1100),
            is_verified: true,
            created_at: Utc::now(),
        };
        inserted.push(artisan.id);
        write(&store.artisans, "artisans")?.insert(artisan.id, artisan);
    }
    Ok(inserted)
}
