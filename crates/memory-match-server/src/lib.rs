pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod leaderboard_store;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let web_root = config.web_root.clone();
    let timeout = Duration::from_secs(config.limits.request_timeout_secs);
    let body_limit = config.limits.max_body_bytes;
    let state = AppState::new(config);

    let api_routes = Router::new()
        .route("/cards", get(api::get_cards))
        .route(
            "/leaderboard",
            get(api::get_leaderboard).post(api::post_leaderboard),
        );

    // Anything else is a static asset; `/` serves the game page.
    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&web_root))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    (app, state)
}
