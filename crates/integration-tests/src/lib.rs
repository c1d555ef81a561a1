//! End-to-end tests for the Karigar storefront.
//!
//! Each test starts its own storefront on an ephemeral port, backed by a
//! freshly seeded in-memory store, and talks to it over real HTTP. No
//! external services are needed.
//!
//! ```bash
//! cargo test -p karigar-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use karigar_storefront::{config::StorefrontConfig, state::AppState, store::MemStore};

/// A running storefront and a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Serve the seeded demo catalog on `127.0.0.1:0`.
    pub async fn seeded() -> Self {
        Self::serve(MemStore::seeded().unwrap()).await
    }

    /// Serve an empty store.
    pub async fn empty() -> Self {
        Self::serve(MemStore::new()).await
    }

    async fn serve(store: MemStore) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = karigar_storefront::app(AppState::new(StorefrontConfig::default(), store));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }

    /// GET `path` and decode a 2xx JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> T {
        let response = self.get(path).await;
        assert!(response.status().is_success(), "GET {path}: {}", response.status());
        response.json().await.unwrap()
    }

    /// Register a customer and return its user object.
    pub async fn register(&self, username: &str, password: &str) -> Value {
        let response = self
            .post(
                "/api/auth/register",
                &json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "password": password,
                    "firstName": "Test",
                    "lastName": "Customer"
                }),
            )
            .await;
        assert!(response.status().is_success(), "register {username}");
        let body: Value = response.json().await.unwrap();
        body["user"].clone()
    }
}
