pub mod config;
pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the HTTP router.
pub fn app(config: config::Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Puzzles
        .route("/api/puzzles/new", get(routes::puzzles::new_puzzle))
        .route("/api/puzzles/scan", post(routes::puzzles::scan_position))
        .route("/api/puzzles/check", post(routes::puzzles::check_move))
        .route("/api/puzzles/moves", get(routes::puzzles::legal_moves))
        // Shared state
        .layer(Extension(config))
        .layer(cors)
}
