//! Artisan profiles.

use chrono::{DateTime, Utc};
use serde::Serialize;

use karigar_core::{ArtisanId, Rating, UserId};

use super::User;

/// A seller profile attached one-to-one to a [`User`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    pub id: ArtisanId,
    pub user_id: UserId,
    pub bio: Option<String>,
    pub specialization: String,
    pub location: String,
    pub rating: Rating,
    pub total_sales: u32,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`Artisan`]. Rating, sales and verification start at
/// their defaults and are owned by the store.
#[derive(Debug, Clone)]
pub struct NewArtisan {
    pub user_id: UserId,
    pub bio: Option<String>,
    pub specialization: String,
    pub location: String,
}

/// An artisan together with its owning user account.
#[derive(Debug, Clone, Serialize)]
pub struct ArtisanWithUser {
    #[serde(flatten)]
    pub artisan: Artisan,
    pub user: User,
}
