use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/classify", post(handlers::triage::classify))
        .route("/upload", post(handlers::triage::upload))
        // Static UI (when the built frontend is dropped next to the binary)
        .fallback_service(ServeDir::new("static"))
}
