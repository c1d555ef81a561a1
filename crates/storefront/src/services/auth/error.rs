//! Authentication error types.

use thiserror::Error;

use crate::store::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] karigar_core::EmailError),

    /// Unknown email, wrong password, or an account without a password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email or username already registered.
    #[error("user already exists: {0}")]
    UserAlreadyExists(String),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Storage error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
