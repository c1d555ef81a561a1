//! Artisan repository.

use chrono::Utc;

use karigar_core::{ArtisanId, Rating, UserId};

use super::{MemStore, RepositoryError, read, write};
use crate::models::{Artisan, ArtisanWithUser, NewArtisan};

/// Number of artisans returned by [`ArtisanRepository::featured`].
pub const FEATURED_ARTISAN_COUNT: usize = 6;

/// Repository for artisan profiles.
pub struct ArtisanRepository<'a> {
    store: &'a MemStore,
}

impl<'a> ArtisanRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Get an artisan by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn get(&self, id: ArtisanId) -> Result<Option<Artisan>, RepositoryError> {
        Ok(read(&self.store.artisans, "artisans")?.get(&id).cloned())
    }

    /// Get the artisan profile owned by a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn get_by_user_id(&self, user_id: UserId) -> Result<Option<Artisan>, RepositoryError> {
        let artisans = read(&self.store.artisans, "artisans")?;
        Ok(artisans.values().find(|a| a.user_id == user_id).cloned())
    }

    /// Create an artisan profile with zero rating and sales, unverified.
    ///
    /// The owning user is not checked; callers resolve it first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn create(&self, new: NewArtisan) -> Result<Artisan, RepositoryError> {
        let artisan = Artisan {
            id: ArtisanId::generate(),
            user_id: new.user_id,
            bio: new.bio,
            specialization: new.specialization,
            location: new.location,
            rating: Rating::ZERO,
            total_sales: 0,
            is_verified: false,
            created_at: Utc::now(),
        };
        write(&self.store.artisans, "artisans")?.insert(artisan.id, artisan.clone());
        Ok(artisan)
    }

    /// The first [`FEATURED_ARTISAN_COUNT`] artisans in insertion order, each
    /// joined with its user account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DanglingReference` if an artisan's user is
    /// missing.
    pub fn featured(&self) -> Result<Vec<ArtisanWithUser>, RepositoryError> {
        let users = read(&self.store.users, "users")?;
        let artisans = read(&self.store.artisans, "artisans")?;

        artisans
            .values()
            .take(FEATURED_ARTISAN_COUNT)
            .map(|artisan| {
                let user = users
                    .get(&artisan.user_id)
                    .ok_or_else(|| RepositoryError::dangling("user", artisan.user_id))?;
                Ok(ArtisanWithUser {
                    artisan: artisan.clone(),
                    user: user.clone(),
                })
            })
            .collect()
    }
}
