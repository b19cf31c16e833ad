//! Handlers for the `/stepTargets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use combovault_core::types::DbId;
use combovault_core::validation::required_id;
use combovault_db::models::step_target::{CreateStepTarget, StepTarget, UpdateStepTarget};
use combovault_db::repositories::StepTargetRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /stepTargets/step/{stepId}
pub async fn get_step_targets(
    State(state): State<AppState>,
    Path(step_id): Path<DbId>,
) -> AppResult<Json<Vec<StepTarget>>> {
    let targets = StepTargetRepo::list_by_step(&state.pool, step_id).await?;
    Ok(Json(targets))
}

/// POST /stepTargets/step/{stepId}
pub async fn create_step_target(
    State(state): State<AppState>,
    Path(step_id): Path<DbId>,
    Json(input): Json<CreateStepTarget>,
) -> AppResult<(StatusCode, Json<StepTarget>)> {
    let target_card_id = required_id(input.target_card_id)?;

    let target = StepTargetRepo::create(&state.pool, step_id, target_card_id).await?;

    Ok((StatusCode::CREATED, Json(target)))
}

/// DELETE /stepTargets/{targetId}
pub async fn remove_target(
    State(state): State<AppState>,
    Path(target_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !StepTargetRepo::delete(&state.pool, target_id).await? {
        return Err(AppError::not_found("Step target", target_id));
    }

    Ok(Json(MessageResponse::new("Step target removed successfully")))
}

/// PUT /stepTargets/{targetId}
pub async fn update_target(
    State(state): State<AppState>,
    Path(target_id): Path<DbId>,
    Json(input): Json<UpdateStepTarget>,
) -> AppResult<Json<MessageResponse>> {
    let target_card_id = required_id(input.target_card_id)?;

    if !StepTargetRepo::update(&state.pool, target_id, target_card_id).await? {
        return Err(AppError::not_found("Step target", target_id));
    }

    Ok(Json(MessageResponse::new("Step target updated successfully")))
}
