//! Handlers for the `/combos` resource, including the full-combo
//! composite create and update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use combovault_core::types::DbId;
use combovault_core::validation::{required_id, required_text};
use combovault_db::models::combo::{
    Combo, ComboWithDetails, CreateCombo, FullComboPayload, UpdateCombo,
};
use combovault_db::repositories::ComboRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedCombo, MessageResponse};
use crate::state::AppState;

/// GET /combos/{comboId}
///
/// One combo with tags, starting hand, and final board attached; hand and
/// board keep their write-time order.
pub async fn get_combo(
    State(state): State<AppState>,
    Path(combo_id): Path<DbId>,
) -> AppResult<Json<ComboWithDetails>> {
    let combo = ComboRepo::get_with_details(&state.pool, combo_id)
        .await?
        .ok_or(AppError::not_found("Combo", combo_id))?;
    Ok(Json(combo))
}

/// GET /combos/deck/{deckId}
///
/// Every combo of a deck with details attached. A deck with no combos
/// yields an empty list, not an error.
pub async fn get_combos_by_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<DbId>,
) -> AppResult<Json<Vec<ComboWithDetails>>> {
    let combos = ComboRepo::list_by_deck_with_details(&state.pool, deck_id).await?;
    Ok(Json(combos))
}

/// POST /combos/deck/{deckId}
pub async fn create_combo(
    State(state): State<AppState>,
    Path(deck_id): Path<DbId>,
    Json(input): Json<CreateCombo>,
) -> AppResult<(StatusCode, Json<Combo>)> {
    let author = required_text(input.author.as_deref())?;
    let title = required_text(input.title.as_deref())?;
    let difficulty = required_text(input.difficulty.as_deref())?;

    let combo = ComboRepo::create(&state.pool, deck_id, author, title, difficulty).await?;

    tracing::info!(combo_id = combo.id, deck_id, "Combo created");

    Ok((StatusCode::CREATED, Json(combo)))
}

/// DELETE /combos/{comboId}
pub async fn remove_combo(
    State(state): State<AppState>,
    Path(combo_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ComboRepo::delete(&state.pool, combo_id).await? {
        return Err(AppError::not_found("Combo", combo_id));
    }

    tracing::info!(combo_id, "Combo removed");

    Ok(Json(MessageResponse::new("Combo removed successfully")))
}

/// PUT /combos/{comboId}
pub async fn update_combo(
    State(state): State<AppState>,
    Path(combo_id): Path<DbId>,
    Json(input): Json<UpdateCombo>,
) -> AppResult<Json<MessageResponse>> {
    let title = required_text(input.title.as_deref())?;
    let difficulty = required_text(input.difficulty.as_deref())?;

    if !ComboRepo::update_fields(&state.pool, combo_id, title, difficulty).await? {
        return Err(AppError::not_found("Combo", combo_id));
    }

    Ok(Json(MessageResponse::new("Combo updated successfully")))
}

/// PUT /combos/{comboId}/assign-tag/{tagId}
pub async fn assign_tag(
    State(state): State<AppState>,
    Path((combo_id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    ComboRepo::assign_tag(&state.pool, combo_id, tag_id).await?;

    Ok(Json(MessageResponse::new(
        "Tag assigned to combo successfully",
    )))
}

/// POST /combos/create-full-combo
///
/// Persists the nested payload as one transaction; see
/// [`ComboRepo::create_full`] for the statement ordering contract.
pub async fn create_full_combo(
    State(state): State<AppState>,
    Json(payload): Json<FullComboPayload>,
) -> AppResult<(StatusCode, Json<CreatedCombo>)> {
    let deck_id = required_id(payload.deck_id)?;
    let author = required_text(payload.author.as_deref())?;
    let title = required_text(payload.title.as_deref())?;
    let difficulty = required_text(payload.difficulty.as_deref())?;

    let combo =
        ComboRepo::create_full(&state.pool, deck_id, author, title, difficulty, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedCombo {
            message: "Combo created successfully",
            combo,
        }),
    ))
}

/// PUT /combos/update-full-combo/{comboId}
///
/// Full replacement: children absent from the payload are removed, and
/// surviving children are recreated with fresh ids.
pub async fn update_full_combo(
    State(state): State<AppState>,
    Path(combo_id): Path<DbId>,
    Json(payload): Json<FullComboPayload>,
) -> AppResult<Json<MessageResponse>> {
    let deck_id = required_id(payload.deck_id)?;
    let author = required_text(payload.author.as_deref())?;
    let title = required_text(payload.title.as_deref())?;
    let difficulty = required_text(payload.difficulty.as_deref())?;

    let replaced = ComboRepo::update_full(
        &state.pool,
        combo_id,
        deck_id,
        author,
        title,
        difficulty,
        &payload,
    )
    .await?;

    if !replaced {
        return Err(AppError::not_found("Combo", combo_id));
    }

    Ok(Json(MessageResponse::new("Combo updated successfully")))
}
