//! Category repository.

use karigar_core::CategoryId;

use super::{MemStore, RepositoryError, read, write};
use crate::models::{Category, NewCategory};

/// Repository for product categories.
pub struct CategoryRepository<'a> {
    store: &'a MemStore,
}

impl<'a> CategoryRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// All categories in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(read(&self.store.categories, "categories")?
            .values()
            .cloned()
            .collect())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        Ok(read(&self.store.categories, "categories")?.get(&id).cloned())
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let categories = read(&self.store.categories, "categories")?;
        Ok(categories.values().find(|c| c.slug == slug).cloned())
    }

    /// Create a category with a product count of zero.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is already in use.
    pub fn create(&self, new: NewCategory) -> Result<Category, RepositoryError> {
        let mut categories = write(&self.store.categories, "categories")?;
        if categories.values().any(|c| c.slug == new.slug) {
            return Err(RepositoryError::Conflict(format!(
                "category slug '{}' already exists",
                new.slug
            )));
        }

        let category = Category {
            id: CategoryId::generate(),
            name: new.name,
            description: new.description,
            icon: new.icon,
            slug: new.slug,
            product_count: 0,
        };
        categories.insert(category.id, category.clone());
        Ok(category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::test_support::create_category;

    #[test]
    fn test_list_in_insertion_order() {
        let store = MemStore::new();
        for slug in ["pottery", "textiles", "jewelry"] {
            create_category(&store, slug);
        }

        let slugs: Vec<String> = CategoryRepository::new(&store)
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(slugs, ["pottery", "textiles", "jewelry"]);
    }

    #[test]
    fn test_create_starts_with_zero_products() {
        let store = MemStore::new();
        assert_eq!(create_category(&store, "pottery").product_count, 0);
    }

    #[test]
    fn test_duplicate_slug_conflicts() {
        let store = MemStore::new();
        create_category(&store, "pottery");

        let result = CategoryRepository::new(&store).create(NewCategory {
            name: "More Pottery".to_string(),
            description: None,
            icon: "fas fa-vase".to_string(),
            slug: "pottery".to_string(),
        });
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[test]
    fn test_get_and_get_by_slug() {
        let store = MemStore::new();
        let category = create_category(&store, "paintings");
        let repo = CategoryRepository::new(&store);

        assert_eq!(repo.get(category.id).unwrap().unwrap().slug, "paintings");
        assert_eq!(
            repo.get_by_slug("paintings").unwrap().unwrap().id,
            category.id
        );
        assert!(repo.get(CategoryId::generate()).unwrap().is_none());
        assert!(repo.get_by_slug("sculpture").unwrap().is_none());
    }
}
