/// Common test utilities for integration tests
///
/// Builds the full router on top of the in-memory store, so these tests
/// need neither PostgreSQL nor network access.

use axum::body::Body;
use axum::http::{Request, Response};
use dashboard_api::app::{build_router, AppState};
use dashboard_api::config::{ApiConfig, AuthConfig, Config, DatabaseConfig};
use dashboard_shared::auth::credentials::DatabaseCredentialsProvider;
use dashboard_shared::auth::password::hash_password;
use dashboard_shared::cache::PathRevalidator;
use dashboard_shared::models::user::User;
use dashboard_shared::store::InMemoryStore;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const USER_EMAIL: &str = "user@nextmail.com";
pub const USER_PASSWORD: &str = "123456";

/// Test context containing the router and handles on its collaborators
pub struct TestContext {
    pub app: axum::Router,
    pub store: InMemoryStore,
    pub cache: PathRevalidator,
}

impl TestContext {
    /// Creates a context with one registered user
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        store
            .seed_user(User {
                id: Uuid::new_v4(),
                name: "User".to_string(),
                email: USER_EMAIL.to_string(),
                password_hash: hash_password(USER_PASSWORD).expect("hash should succeed"),
            })
            .expect("seed user");

        let cache = PathRevalidator::new();
        let config = test_config();
        let credentials = Arc::new(DatabaseCredentialsProvider::new(
            Arc::new(store.clone()),
            config.auth.default_redirect.clone(),
        ));

        let state = AppState::from_parts(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(cache.clone()),
            credentials,
            config,
        );

        Self {
            app: build_router(state),
            store,
            cache,
        }
    }

    /// Posts a urlencoded form body
    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.app.clone().oneshot(request).await.unwrap()
    }
}

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
        },
        auth: AuthConfig {
            default_redirect: "/dashboard".to_string(),
        },
    }
}

/// Reads a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Reads a response body as text
pub async fn text_body(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body).to_string()
}
