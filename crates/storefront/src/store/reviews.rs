//! Review repository.

use chrono::Utc;

use karigar_core::{ProductId, ReviewId};

use super::{MemStore, RepositoryError, read, write};
use crate::models::{NewReview, Review, ReviewWithUser};

/// Repository for product reviews.
pub struct ReviewRepository<'a> {
    store: &'a MemStore,
}

impl<'a> ReviewRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Store a review. The rating range is checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn create(&self, new: NewReview) -> Result<Review, RepositoryError> {
        let review = Review {
            id: ReviewId::generate(),
            user_id: new.user_id,
            product_id: new.product_id,
            rating: new.rating,
            comment: new.comment,
            created_at: Utc::now(),
        };
        write(&self.store.reviews, "reviews")?.insert(review.id, review.clone());
        Ok(review)
    }

    /// A product's reviews, oldest first, each joined with its author.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DanglingReference` if an author account is
    /// missing.
    pub fn product_reviews(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<ReviewWithUser>, RepositoryError> {
        let users = read(&self.store.users, "users")?;
        let reviews = read(&self.store.reviews, "reviews")?;

        reviews
            .values()
            .filter(|r| r.product_id == product_id)
            .map(|review| {
                let user = users
                    .get(&review.user_id)
                    .ok_or_else(|| RepositoryError::dangling("user", review.user_id))?;
                Ok(ReviewWithUser {
                    review: review.clone(),
                    user: user.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::test_support::create_user;
    use karigar_core::UserId;

    #[test]
    fn test_product_reviews_joined_with_author() {
        let store = MemStore::new();
        let author = create_user(&store, "meera");
        let product_id = ProductId::generate();
        let repo = ReviewRepository::new(&store);

        repo.create(NewReview {
            user_id: author.id,
            product_id,
            rating: 5,
            comment: Some("Lovely glaze".to_string()),
        })
        .unwrap();
        repo.create(NewReview {
            user_id: author.id,
            product_id: ProductId::generate(),
            rating: 3,
            comment: None,
        })
        .unwrap();

        let reviews = repo.product_reviews(product_id).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].review.rating, 5);
        assert_eq!(reviews[0].user.username, "meera");
    }

    #[test]
    fn test_missing_author_is_dangling() {
        let store = MemStore::new();
        let product_id = ProductId::generate();
        let repo = ReviewRepository::new(&store);
        repo.create(NewReview {
            user_id: UserId::generate(),
            product_id,
            rating: 4,
            comment: None,
        })
        .unwrap();

        assert!(matches!(
            repo.product_reviews(product_id),
            Err(RepositoryError::DanglingReference { entity: "user", .. })
        ));
    }
}
