use crate::error::AppError;
use crate::models::NewLostFoundReport;
use crate::response::{message, ok_many};
use crate::service::LostFoundService;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

/// GET /api/lost-found/reports
pub async fn list_reports(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let reports = LostFoundService::list(&state.pool).await?;
    Ok(ok_many(reports))
}

/// POST /api/lost-found/reports
pub async fn create_report(
    State(state): State<AppState>,
    body: Result<Json<NewLostFoundReport>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(report) = body?;
    let id = LostFoundService::create(&state.pool, &report).await?;
    tracing::debug!(id, report_type = ?report.report_type, "lost/found report submitted");
    Ok(message("Report submitted successfully"))
}
