//! Handler for the `/comboTags` association resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use combovault_core::validation::required_id;
use combovault_db::models::tag::{ComboTag, CreateComboTag};
use combovault_db::repositories::TagRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /comboTags
pub async fn create_combo_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateComboTag>,
) -> AppResult<(StatusCode, Json<ComboTag>)> {
    let combo_id = required_id(input.combo_id)?;
    let tag_id = required_id(input.tag_id)?;

    let association = TagRepo::attach_to_combo(&state.pool, combo_id, tag_id).await?;

    Ok((StatusCode::CREATED, Json(association)))
}
