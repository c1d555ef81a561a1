//! Product categories.

use serde::Serialize;

use karigar_core::CategoryId;

/// A browsable product category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    /// Icon token understood by the client (e.g. `fas fa-vase`).
    pub icon: String,
    /// URL-safe unique key.
    pub slug: String,
    /// Denormalized display count; not maintained by product writes.
    pub product_count: u32,
}

/// Insert shape for [`Category`].
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub icon: String,
    pub slug: String,
}
