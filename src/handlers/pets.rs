//! Pet listing, adoption, reset and re-initialization handlers.

use crate::error::{AppError, StorageContext};
use crate::models::{
    AdoptRequest, AdoptResponse, AdoptionView, AdoptionsQuery, InitResponse, PetIdInput,
    ResetResponse,
};
use crate::response::ok_many;
use crate::seed::reinitialize;
use crate::service::PetService;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

/// GET /api/pets: pets still available.
pub async fn list_pets(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let pets = PetService::list_available(&state.pool)
        .await
        .context("Failed to load pets")?;
    Ok(ok_many(pets))
}

/// POST /api/adopt: identity is checked before the pet id.
pub async fn adopt(
    State(state): State<AppState>,
    body: Result<Json<AdoptRequest>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(req) = body?;
    let asserted = req.asserted_name();
    let user = state
        .identity
        .identify(asserted.as_deref())
        .await
        .ok_or_else(|| AppError::Forbidden("Please login first".into()))?;
    let pet_id = match req.pet_id() {
        PetIdInput::Missing => return Err(AppError::Validation("Pet ID is required".into())),
        PetIdInput::Unknown => return Err(AppError::NotFound("Pet not found".into())),
        PetIdInput::Id(id) => id,
    };

    let adopted = PetService::adopt(&state.pool, pet_id, &user)
        .await
        .context("Adoption failed")?;
    Ok(Json(AdoptResponse {
        message: format!(
            "Successfully adopted {}! Thank you for giving them a forever home!",
            adopted.pet_name
        ),
        pet_name: adopted.pet_name,
        user_name: user.name().to_string(),
    }))
}

/// GET /api/adoptions?user_name=
pub async fn list_adoptions(
    State(state): State<AppState>,
    query: Result<Query<AdoptionsQuery>, QueryRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Query(query) = query?;
    let user = state
        .identity
        .identify(query.user_name.as_deref())
        .await
        .ok_or_else(|| AppError::Validation("Username is required".into()))?;
    let rows = PetService::adoptions_for(&state.pool, &user)
        .await
        .context("Failed to fetch adoptions")?;
    Ok(ok_many(
        rows.into_iter().map(AdoptionView::from).collect::<Vec<_>>(),
    ))
}

/// POST /api/reset
pub async fn reset(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let pets_reset = PetService::reset(&state.pool)
        .await
        .context("Reset failed")?;
    Ok(Json(ResetResponse {
        message: "Database reset successfully! All pets are available for adoption again.".into(),
        pets_reset,
    }))
}

/// GET /api/init: wipes pets and adoptions and reseeds.
pub async fn init(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let pets_added = reinitialize(&state.pool)
        .await
        .context("Initialization failed")?;
    Ok(Json(InitResponse {
        message: "Database initialized successfully!".into(),
        pets_added,
    }))
}
