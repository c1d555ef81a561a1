//! User repository.

use chrono::Utc;

use karigar_core::UserId;

use super::{MemStore, RepositoryError, read, write};
use crate::models::{NewUser, User};

/// Repository for user accounts.
pub struct UserRepository<'a> {
    store: &'a MemStore,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn get(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(read(&self.store.users, "users")?.get(&id).cloned())
    }

    /// Get the first user whose email equals `email` exactly.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the table lock is poisoned.
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = read(&self.store.users, "users")?;
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username or email is taken.
    pub fn create(&self, new: NewUser) -> Result<User, RepositoryError> {
        let mut users = write(&self.store.users, "users")?;

        if users.values().any(|u| u.email == new.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }
        if users.values().any(|u| u.username == new.username) {
            return Err(RepositoryError::Conflict(
                "username already exists".to_owned(),
            ));
        }

        let user = User {
            id: UserId::generate(),
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            first_name: new.first_name,
            last_name: new.last_name,
            role: new.role,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
