/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use dashboard_api::{app::AppState, config::Config};
/// use dashboard_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::postgres(pool, config);
/// let app = dashboard_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::actions::{auth::AuthActions, invoices::InvoiceActions};
use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use dashboard_shared::auth::credentials::{CredentialsProvider, DatabaseCredentialsProvider};
use dashboard_shared::cache::{CacheInvalidator, PathRevalidator};
use dashboard_shared::store::{InvoiceStore, PgStore, UserStore};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned per request via Axum's `State` extractor. Every collaborator sits
/// behind an `Arc<dyn _>` so tests can substitute in-memory versions.
#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<dyn InvoiceStore>,

    pub users: Arc<dyn UserStore>,

    pub cache: Arc<dyn CacheInvalidator>,

    pub credentials: Arc<dyn CredentialsProvider>,

    pub config: Arc<Config>,
}

impl AppState {
    /// State backed by PostgreSQL, an in-process revalidator and the
    /// database credentials provider
    pub fn postgres(pool: PgPool, config: Config) -> Self {
        let store = Arc::new(PgStore::new(pool));
        let credentials = Arc::new(DatabaseCredentialsProvider::new(
            store.clone(),
            config.auth.default_redirect.clone(),
        ));

        Self {
            invoices: store.clone(),
            users: store,
            cache: Arc::new(PathRevalidator::new()),
            credentials,
            config: Arc::new(config),
        }
    }

    /// State from explicit collaborators
    pub fn from_parts(
        invoices: Arc<dyn InvoiceStore>,
        users: Arc<dyn UserStore>,
        cache: Arc<dyn CacheInvalidator>,
        credentials: Arc<dyn CredentialsProvider>,
        config: Config,
    ) -> Self {
        Self {
            invoices,
            users,
            cache,
            credentials,
            config: Arc::new(config),
        }
    }

    pub fn invoice_actions(&self) -> InvoiceActions {
        InvoiceActions::new(self.invoices.clone(), self.cache.clone())
    }

    pub fn auth_actions(&self) -> AuthActions {
        AuthActions::new(self.credentials.clone(), self.users.clone())
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /health
/// ├── POST /login                              # authenticate
/// ├── POST /signup                             # sign up
/// └── /dashboard/invoices/
///     ├── POST /create                         # create invoice
///     ├── POST /:id/edit                       # update invoice
///     └── POST /:id/delete                     # delete invoice
/// ```
///
/// All form routes take `application/x-www-form-urlencoded` bodies.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let invoice_routes = Router::new()
        .route("/create", post(routes::invoices::create_invoice))
        .route("/:id/edit", post(routes::invoices::update_invoice))
        .route("/:id/delete", post(routes::invoices::delete_invoice));

    let cors = if state.config.api.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/login", post(routes::auth::authenticate))
        .route("/signup", post(routes::auth::sign_up))
        .nest("/dashboard/invoices", invoice_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
