//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use karigar_core::{Email, UserId, UserRole};

/// A marketplace account.
///
/// The password hash never leaves the process: it is skipped on
/// serialization and redacted from `Debug` output, so any `User` can be
/// returned to a client as-is.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    /// Argon2 PHC string. `None` for accounts that cannot log in with a
    /// password (the seeded artisan accounts).
    #[serde(skip)]
    pub password_hash: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &self.password_hash.as_ref().map(|_| "[REDACTED]"))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Insert shape for [`User`].
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Email,
    pub password_hash: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: UserId::generate(),
            username: "priya_devi".to_string(),
            email: Email::parse("priya.devi@example.com").unwrap(),
            password_hash: Some("$argon2id$v=19$super-secret-hash".to_string()),
            first_name: "Priya".to_string(),
            last_name: "Devi".to_string(),
            role: UserRole::Artisan,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_serialization_omits_password() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Priya");
        assert_eq!(json["role"], "artisan");
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", user());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-hash"));
    }
}
