//! Handlers for the `/steps` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use combovault_core::types::DbId;
use combovault_core::validation::{required_id, required_order, required_text};
use combovault_db::models::step::{CreateStep, StepWithTargets, UpdateStep};
use combovault_db::repositories::StepRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedStep, MessageResponse};
use crate::state::AppState;

/// GET /steps/combo/{comboId}
///
/// Steps in execution order, each with its target cards attached. A combo
/// with no steps yields an empty list.
pub async fn get_combo_steps(
    State(state): State<AppState>,
    Path(combo_id): Path<DbId>,
) -> AppResult<Json<Vec<StepWithTargets>>> {
    let steps = StepRepo::list_with_targets(&state.pool, combo_id).await?;
    Ok(Json(steps))
}

/// POST /steps/combo/{comboId}
pub async fn create_step(
    State(state): State<AppState>,
    Path(combo_id): Path<DbId>,
    Json(input): Json<CreateStep>,
) -> AppResult<(StatusCode, Json<CreatedStep>)> {
    let card_id = required_id(input.card_id)?;
    let action_text = required_text(input.action_text.as_deref())?;
    let step_order = required_order(input.step_order)?;

    let step = StepRepo::create(
        &state.pool,
        combo_id,
        card_id,
        action_text,
        step_order,
        &input.target_card_ids,
    )
    .await?;

    tracing::info!(step_id = step.id, combo_id, "Step created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedStep {
            message: "Step created",
            step,
        }),
    ))
}

/// DELETE /steps/{stepId}
pub async fn remove_step(
    State(state): State<AppState>,
    Path(step_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !StepRepo::delete(&state.pool, step_id).await? {
        return Err(AppError::not_found("Step", step_id));
    }

    Ok(Json(MessageResponse::new("Step removed successfully")))
}

/// PUT /steps/{stepId}
pub async fn update_step(
    State(state): State<AppState>,
    Path(step_id): Path<DbId>,
    Json(input): Json<UpdateStep>,
) -> AppResult<Json<MessageResponse>> {
    if !StepRepo::update(&state.pool, step_id, &input).await? {
        return Err(AppError::not_found("Step", step_id));
    }

    Ok(Json(MessageResponse::new("Step updated successfully")))
}
