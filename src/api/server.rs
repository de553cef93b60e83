//! HTTP API server

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{require_auth, RevocationRegistry};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::Store;

use super::{events, notes, routes};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub revoked: RevocationRegistry,
}

pub type SharedState = Arc<RwLock<AppState>>;

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    if config.uses_dev_secret() && !config.server.dev_mode {
        return Err(Error::Config(
            "refusing to start with the built-in development secret; \
             set DAYBOOK_SECRET or enable server.dev_mode"
                .to_string(),
        ));
    }

    let store = Store::connect(&config.database.url).await?;
    store.init_schema().await?;

    let state = Arc::new(RwLock::new(AppState {
        config,
        store,
        revoked: RevocationRegistry::new(),
    }));

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
fn create_router(state: SharedState) -> Router {
    // Everything behind the request guard; handlers receive the resolved
    // identity through request extensions.
    let protected = Router::new()
        .route("/auth-check", get(routes::auth_check))
        .route("/logout", post(routes::logout))
        .route(
            "/settings",
            patch(routes::update_settings).put(routes::update_settings),
        )
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route("/notes/pinned", get(notes::list_pinned_notes))
        .route(
            "/notes/{id}",
            put(notes::update_note).delete(notes::delete_note),
        )
        .route("/notes/{id}/pin", patch(notes::toggle_pin))
        .route(
            "/calendar-events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/calendar-events/{id}",
            patch(events::update_event).delete(events::delete_event),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/health", get(routes::health))
        .route("/register", post(routes::register))
        .route("/login", post(routes::login))
        .route("/tags", get(notes::list_tags))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
