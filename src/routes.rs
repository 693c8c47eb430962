use axum::http::header::{HeaderName, HeaderValue};
use axum::routing::{any, get};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers;
use crate::state::AppState;

fn cors_header(
    name: &'static str,
    value: &'static str,
) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

/// Build the full application router. The CORS headers are attached as
/// response-header layers so every path carries them, error and fallback
/// responses included.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", any(handlers::translate))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(cors_header("access-control-allow-origin", "*"))
        .layer(cors_header("access-control-allow-methods", "POST, OPTIONS"))
        .layer(cors_header("access-control-allow-headers", "Content-Type"))
        .with_state(state)
}
