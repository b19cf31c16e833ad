//! Handlers for the standalone `/comboStartingHand` and `/comboFinalBoard`
//! append endpoints.
//!
//! These are the non-orchestrated write paths: per-element card upserts
//! and slot inserts fire concurrently rather than inside a transaction.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use combovault_core::error::CoreError;
use combovault_core::types::DbId;
use combovault_db::models::combo::{ComboCardListPayload, SlotCard};
use combovault_db::repositories::ComboCardRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /comboStartingHand
pub async fn create_starting_hand(
    State(state): State<AppState>,
    Json(payload): Json<ComboCardListPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (combo_id, cards) = unpack(payload)?;

    ComboCardRepo::add_starting_hand(&state.pool, combo_id, &cards).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Starting hand added successfully.")),
    ))
}

/// POST /comboFinalBoard
pub async fn create_final_board(
    State(state): State<AppState>,
    Json(payload): Json<ComboCardListPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (combo_id, cards) = unpack(payload)?;

    ComboCardRepo::add_final_board(&state.pool, combo_id, &cards).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Final board added successfully.")),
    ))
}

/// Both endpoints require a combo id and a cards array (which may be
/// empty).
fn unpack(payload: ComboCardListPayload) -> Result<(DbId, Vec<SlotCard>), AppError> {
    match (payload.combo_id, payload.cards) {
        (Some(combo_id), Some(cards)) if combo_id > 0 => Ok((combo_id, cards)),
        _ => Err(AppError::Core(CoreError::Validation(
            "Missing combo_id or cards array.".to_string(),
        ))),
    }
}
