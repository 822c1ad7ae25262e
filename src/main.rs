//! PawHaven Pet Adoption Backend
//!
//! A REST backend for the adoption portal with flat-file JSON persistence.

mod api;
mod auth;
mod clock;
mod config;
mod errors;
mod intake;
mod matching;
mod models;
mod query;
mod scheduling;
mod store;

use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clock::{Clock, IdSource, SystemClock, UuidSource};
use config::Config;
use errors::AppError;
use store::{FileStore, Repository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdSource>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PawHaven Adoption Backend");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the flat-file store
    let file_store = FileStore::open(&config.data_dir).await?;
    let repo = Arc::new(Repository::new(file_store));

    let pets = repo.list_pets().await?;
    let users = repo.list_users().await?;
    tracing::info!("Store opened with {} pets, {} users", pets.len(), users.len());
    if users.is_empty() {
        tracing::warn!("No user accounts provisioned; every authenticated route will reject");
    }

    // Create application state
    let state = AppState {
        repo,
        clock: Arc::new(SystemClock),
        ids: Arc::new(UuidSource),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes that require no authentication
    let public_routes = Router::new()
        .route("/pets", get(api::list_pets))
        .route("/pets/{id}", get(api::get_pet))
        .route("/appointments/available-slots", get(api::available_slots))
        .route("/health", get(health_check));

    // Routes for any authenticated user
    let user_routes = Router::new()
        .route("/applications", post(api::submit_application))
        .route("/applications/my-applications", get(api::my_applications))
        .route("/applications/{id}", get(api::get_application))
        .route("/favorites", get(api::list_favorites))
        .route("/favorites/{id}", post(api::add_favorite))
        .route("/favorites/{id}", delete(api::remove_favorite))
        .route("/appointments", post(api::schedule_appointment))
        .route("/appointments/my-appointments", get(api::my_appointments))
        .route("/appointments/{id}/cancel", patch(api::cancel_appointment))
        .route("/quiz/submit", post(api::submit_quiz))
        .route("/quiz/results", get(api::quiz_results))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_user,
        ));

    // Routes restricted to admins
    let admin_routes = Router::new()
        .route("/pets", post(api::create_pet))
        .route("/pets/{id}", put(api::update_pet))
        .route("/pets/{id}", delete(api::delete_pet))
        .route("/applications", get(api::list_applications))
        .route(
            "/applications/{id}/status",
            patch(api::update_application_status),
        )
        .layer(middleware::from_fn(auth::require_admin))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_user,
        ));

    Router::new()
        .nest("/api", public_routes.merge(user_routes).merge(admin_routes))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": state.clock.now().to_rfc3339(),
    }))
}

/// JSON 404 for unmatched routes.
async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
