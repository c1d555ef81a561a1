//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use karigar_core::CategoryId;

use super::parse_id;
use crate::error::{AppError, Result};
use crate::models::Category;
use crate::state::AppState;
use crate::store::CategoryRepository;

/// List all categories.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(CategoryRepository::new(state.store()).list()?))
}

/// Get one category.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Category>> {
    let category = match parse_id::<CategoryId>(&id) {
        Some(id) => CategoryRepository::new(state.store()).get(id)?,
        None => None,
    };
    category
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{get, seeded_app};

    #[tokio::test]
    async fn test_index_lists_seeded_categories() {
        let (app, _) = seeded_app();
        let (status, body) = get(&app, "/api/categories").await;

        assert_eq!(status, StatusCode::OK);
        let slugs: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["slug"].as_str().unwrap())
            .collect();
        assert_eq!(
            slugs,
            [
                "pottery",
                "textiles",
                "jewelry",
                "paintings",
                "home-decor",
                "kitchenware",
                "handicrafts"
            ]
        );
        assert_eq!(body[0]["icon"], "fas fa-vase");
        assert!(body[0]["productCount"].is_u64());
    }

    #[tokio::test]
    async fn test_show() {
        let (app, _) = seeded_app();
        let (_, list) = get(&app, "/api/categories").await;
        let id = list[1]["id"].as_str().unwrap();

        let (status, body) = get(&app, &format!("/api/categories/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "textiles");
    }

    #[tokio::test]
    async fn test_show_unknown_or_malformed_is_404() {
        let (app, _) = seeded_app();
        for uri in [
            "/api/categories/not-a-uuid",
            "/api/categories/00000000-0000-4000-8000-000000000000",
        ] {
            let (status, body) = get(&app, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["message"], "Category not found");
        }
    }
}
