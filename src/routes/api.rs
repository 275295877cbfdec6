//! JSON API routes under /api.

use crate::handlers::community::{create_post, list_posts};
use crate::handlers::health::health;
use crate::handlers::lost_found::{create_report, list_reports};
use crate::handlers::pets::{adopt, init, list_adoptions, list_pets, reset};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/pets", get(list_pets))
        .route("/adopt", post(adopt))
        .route("/adoptions", get(list_adoptions))
        .route("/reset", post(reset))
        .route("/community/posts", get(list_posts).post(create_post))
        .route("/lost-found/reports", get(list_reports).post(create_report))
        .route("/init", get(init))
        .route("/health", get(health))
        .with_state(state)
}
