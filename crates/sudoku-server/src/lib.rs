pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;

/// Build the router. The engine is stateless per request, so there is no
/// shared state to carry.
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/generate", get(routes::generate))
        .layer(CorsLayer::permissive())
}
