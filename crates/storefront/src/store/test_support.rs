//! Fixture builders shared by the repository tests.

#![allow(clippy::unwrap_used)]

use karigar_core::{Email, Price, UserRole};

use super::{
    ArtisanRepository, CategoryRepository, MemStore, ProductRepository, UserRepository,
};
use crate::models::{
    Artisan, Category, NewArtisan, NewCategory, NewProduct, NewUser, Product, User,
};

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: Email::parse(&format!("{username}@example.com")).unwrap(),
        password_hash: None,
        first_name: username.to_string(),
        last_name: "Tester".to_string(),
        role: UserRole::Customer,
    }
}

pub fn create_user(store: &MemStore, username: &str) -> User {
    UserRepository::new(store).create(new_user(username)).unwrap()
}

pub fn create_category(store: &MemStore, slug: &str) -> Category {
    CategoryRepository::new(store)
        .create(NewCategory {
            name: slug.to_string(),
            description: None,
            icon: "fas fa-star".to_string(),
            slug: slug.to_string(),
        })
        .unwrap()
}

pub fn create_artisan(store: &MemStore, username: &str) -> Artisan {
    let user = create_user(store, username);
    ArtisanRepository::new(store)
        .create(NewArtisan {
            user_id: user.id,
            bio: None,
            specialization: "Weaver".to_string(),
            location: "Varanasi".to_string(),
        })
        .unwrap()
}

pub fn new_product(name: &str, category: &Category, artisan: &Artisan) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("A handmade {}", name.to_lowercase()),
        price: Price::from_rupees(999),
        original_price: None,
        images: vec!["https://img.example.com/1.jpg".to_string()],
        category_id: category.id,
        artisan_id: artisan.id,
        stock: 5,
        is_active: true,
        tags: vec!["handmade".to_string()],
    }
}

pub fn create_product(
    store: &MemStore,
    name: &str,
    category: &Category,
    artisan: &Artisan,
) -> Product {
    ProductRepository::new(store)
        .create(new_product(name, category, artisan))
        .unwrap()
}
