//! Static pages, scripts and styles from the site root.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::Path as FsPath;

/// Root-level assets served under their own name.
pub const SITE_ASSETS: &[&str] = &[
    "style.css",
    "script.js",
    "header.js",
    "auth.js",
    "translation.js",
];

async fn serve_file(path: &FsPath) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref().to_string())], bytes).into_response()
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "static file unavailable");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Serve `name` from the site root. Names must be a single plain path segment.
pub async fn serve_site_file(state: &AppState, name: &str) -> Response {
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
        return page_not_found();
    }
    serve_file(&state.site.site_root.join(name)).await
}

fn page_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Page not found").into_response()
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    serve_site_file(&state, "index.html").await
}

/// GET /volunteer
pub async fn volunteer(State(state): State<AppState>) -> Response {
    serve_site_file(&state, "volunteer.html").await
}

/// GET /donate
pub async fn donate(State(state): State<AppState>) -> Response {
    serve_site_file(&state, "donate.html").await
}

/// GET /:page: only `.html` pages and the known root assets.
pub async fn page(State(state): State<AppState>, Path(page): Path<String>) -> Response {
    if page.ends_with(".html") || SITE_ASSETS.contains(&page.as_str()) {
        serve_site_file(&state, &page).await
    } else {
        page_not_found()
    }
}
