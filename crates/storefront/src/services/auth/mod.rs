//! Authentication service.
//!
//! Password registration and login against the user repository. Passwords
//! are stored as Argon2id PHC strings.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use karigar_core::{Email, UserRole};

use crate::models::{NewUser, User};
use crate::store::{MemStore, RepositoryError, UserRepository};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Account details for [`AuthService::register`].
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a MemStore) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }

    /// Register a new user with a password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email or username is taken.
    pub fn register(&self, registration: Registration) -> Result<User, AuthError> {
        let email = Email::parse(&registration.email)?;
        validate_password(&registration.password)?;
        let password_hash = hash_password(&registration.password)?;

        let user = self
            .users
            .create(NewUser {
                username: registration.username,
                email,
                password_hash: Some(password_hash),
                first_name: registration.first_name,
                last_name: registration.last_name,
                role: registration.role,
            })
            .map_err(|e| match e {
                RepositoryError::Conflict(detail) => AuthError::UserAlreadyExists(detail),
                other => AuthError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown, the
    /// account has no password, or the password is wrong.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .get_by_email(email.trim())?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, hash)?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::ArtisanRepository;

    fn registration(username: &str, password: &str) -> Registration {
        Registration {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: password.to_string(),
            first_name: "Meera".to_string(),
            last_name: "Iyer".to_string(),
            role: UserRole::Customer,
        }
    }

    #[test]
    fn test_register_then_login() {
        let store = MemStore::new();
        let auth = AuthService::new(&store);

        let user = auth.register(registration("meera", "terracotta")).unwrap();
        assert!(user.password_hash.as_deref().unwrap().starts_with("$argon2"));

        let logged_in = auth.login("meera@example.com", "terracotta").unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let store = MemStore::new();
        let auth = AuthService::new(&store);
        auth.register(registration("meera", "terracotta")).unwrap();

        assert!(matches!(
            auth.login("meera@example.com", "porcelain"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_unknown_email_rejected() {
        let store = MemStore::new();
        assert!(matches!(
            AuthService::new(&store).login("ghost@example.com", "whatever1"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_seeded_accounts_cannot_log_in() {
        let store = MemStore::seeded().unwrap();
        let artisan = &ArtisanRepository::new(&store).featured().unwrap()[0];
        assert!(artisan.user.password_hash.is_none());

        assert!(matches!(
            AuthService::new(&store).login(artisan.user.email.as_str(), "hashedpassword"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_short_password_rejected() {
        let store = MemStore::new();
        assert!(matches!(
            AuthService::new(&store).register(registration("meera", "short")),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let store = MemStore::new();
        let mut reg = registration("meera", "terracotta");
        reg.email = "not-an-email".to_string();
        assert!(matches!(
            AuthService::new(&store).register(reg),
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_duplicate_registration() {
        let store = MemStore::new();
        let auth = AuthService::new(&store);
        auth.register(registration("meera", "terracotta")).unwrap();

        assert!(matches!(
            auth.register(registration("meera", "terracotta")),
            Err(AuthError::UserAlreadyExists(_))
        ));
    }
}
