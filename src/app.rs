//! Full application router with middleware.

use crate::routes::{api_routes, site_routes};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// API under /api, static site at the root. CORS is open to any origin.
///
/// The body limit wraps CORS: `Cors` requires a `Default` response body.
pub fn build_app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        .merge(site_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit))
                .layer(CorsLayer::permissive()),
        )
}
