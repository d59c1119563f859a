use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod health;
pub mod root;

/// Full routing table with middleware; no socket involved.
pub fn app() -> Router {
    // Liveness probes can come from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
