//! Static site routes: root pages and assets, plus /static/images.

use crate::handlers::site::{donate, index, page, volunteer};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::services::ServeDir;

pub fn site_routes(state: AppState) -> Router {
    let images = ServeDir::new(state.site.images_dir());
    Router::new()
        .route("/", get(index))
        .route("/volunteer", get(volunteer))
        .route("/donate", get(donate))
        .route("/:page", get(page))
        .nest_service("/static/images", images)
        .with_state(state)
}
