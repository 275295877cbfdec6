//! Community post handlers.

use crate::error::AppError;
use crate::models::NewCommunityPost;
use crate::response::{message, ok_many};
use crate::service::CommunityService;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

/// GET /api/community/posts
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let posts = CommunityService::list(&state.pool).await?;
    Ok(ok_many(posts))
}

/// POST /api/community/posts: fields are not validated.
pub async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<NewCommunityPost>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(post) = body?;
    let id = CommunityService::create(&state.pool, &post).await?;
    tracing::debug!(id, "community post created");
    Ok(message("Post created successfully"))
}
