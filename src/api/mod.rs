//! Widget Board HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The dashboard document
//! - `POST /ui/...` - Page form targets, each redirecting back to `/`
//!
//! ## Catalog
//! - `GET /api/v1/catalog` - The loaded category catalog
//!
//! ## Widgets
//! - `GET /api/v1/widgets` - List widgets
//! - `POST /api/v1/widgets` - Add a widget
//! - `GET /api/v1/widgets/:id` - Get a widget's card
//! - `DELETE /api/v1/widgets/:id` - Remove a widget
//! - `POST /api/v1/widgets/:id/focus` - Focus a widget
//! - `DELETE /api/v1/widgets/:id/items/:entry` - Remove one entry
//!
//! ## Sidebar
//! - `POST /api/v1/selection` - Checkbox change
//! - `POST /api/v1/tabs/:category` - Switch tab
//! - `POST /api/v1/sidebar/visibility` - Show or hide the sidebar
//! - `GET /api/v1/sidebar` - Sidebar markup and state
//!
//! ## Save
//! - `POST /api/v1/save` - Persist all widgets
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use widgetboard::api::{serve, AppState};
//! use widgetboard::catalog::source_for;
//! use widgetboard::config::Config;
//! use widgetboard::dashboard::Dashboard;
//! use widgetboard::persistence::{FileStore, PersistenceAdapter};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let store = Arc::new(FileStore::new(config.storage.data_path()));
//!     let persistence = PersistenceAdapter::new(store, &config.storage.key);
//!
//!     let state = AppState::new(Dashboard::bootstrap(persistence, false), config.api.clone());
//!     let source = source_for(&config.catalog.source, config.catalog.request_timeout_ms)?;
//!     state.spawn_catalog_load(source);
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Catalog
        .route("/catalog", get(routes::catalog::get_catalog))
        // Widgets
        .route(
            "/widgets",
            get(routes::widgets::list_widgets).post(routes::widgets::add_widget),
        )
        .route(
            "/widgets/:id",
            get(routes::widgets::get_widget).delete(routes::widgets::remove_widget),
        )
        .route("/widgets/:id/focus", post(routes::widgets::focus_widget))
        .route(
            "/widgets/:id/items/:entry",
            delete(routes::widgets::remove_item),
        )
        // Sidebar
        .route("/selection", post(routes::selection::change_selection))
        .route("/tabs/:category", post(routes::selection::activate_tab))
        .route(
            "/sidebar/visibility",
            post(routes::selection::set_visibility),
        )
        .route("/sidebar", get(routes::selection::get_sidebar))
        // Save
        .route("/save", post(routes::save::save));

    let ui_routes = Router::new()
        .route("/widgets", post(routes::ui::add_widget))
        .route("/widgets/:id/remove", post(routes::ui::remove_widget))
        .route("/widgets/:id/focus", post(routes::ui::focus_widget))
        .route(
            "/widgets/:id/items/:entry/remove",
            post(routes::ui::remove_item),
        )
        .route("/panes/:category", post(routes::ui::submit_pane))
        .route("/tabs/:category", post(routes::ui::activate_tab))
        .route("/save", post(routes::ui::save))
        .route("/sidebar/show", post(routes::ui::show_sidebar))
        .route("/sidebar/hide", post(routes::ui::hide_sidebar));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/ui", ui_routes)
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Widget Board listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Widget Board shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
