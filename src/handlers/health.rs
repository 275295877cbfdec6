//! Health check with a live pet count.

use crate::error::AppError;
use crate::models::{HealthFailure, HealthReport};
use crate::state::AppState;
use crate::store::count_pets;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthReport>, (StatusCode, Json<HealthFailure>)> {
    match count_pets(&state.pool).await {
        Ok(total_pets) => Ok(Json(HealthReport {
            status: "healthy",
            database: "working",
            total_pets,
            message: format!("API is running with {} pets in database", total_pets),
        })),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            let error = match e {
                AppError::Db(source) | AppError::Storage { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthFailure {
                    status: "unhealthy",
                    error,
                }),
            ))
        }
    }
}
