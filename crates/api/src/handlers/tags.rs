//! Handlers for the `/tags` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use combovault_core::error::CoreError;
use combovault_core::types::DbId;
use combovault_core::validation::required_text;
use combovault_db::models::tag::{CreateTag, Tag, UpdateTag};
use combovault_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /tags
pub async fn get_all_tags(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    let tags = TagRepo::list_all(&state.pool).await?;
    Ok(Json(tags))
}

/// GET /tags/combo/{comboId}
pub async fn get_tags_by_combo(
    State(state): State<AppState>,
    Path(combo_id): Path<DbId>,
) -> AppResult<Json<Vec<Tag>>> {
    let tags = TagRepo::list_by_combo(&state.pool, combo_id).await?;
    Ok(Json(tags))
}

/// POST /tags
///
/// Tag names are unique; creating a duplicate is a 409 and adds no row.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    let name = required_text(input.name.as_deref())?;

    let tag = TagRepo::create(&state.pool, name)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Tag already exists".to_string(),
        )))?;

    tracing::info!(tag_id = tag.id, "Tag created");

    Ok((StatusCode::CREATED, Json(tag)))
}

/// PUT /tags/{tagId}
pub async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
    Json(input): Json<UpdateTag>,
) -> AppResult<Json<MessageResponse>> {
    let name = required_text(input.name.as_deref())?;

    TagRepo::update(&state.pool, tag_id, name)
        .await?
        .ok_or(AppError::not_found("Tag", tag_id))?;

    Ok(Json(MessageResponse::new("Tag updated successfully")))
}

/// DELETE /tags/{tagId}
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !TagRepo::delete(&state.pool, tag_id).await? {
        return Err(AppError::not_found("Tag", tag_id));
    }

    tracing::info!(tag_id, "Tag deleted");

    Ok(Json(MessageResponse::new("Tag deleted successfully")))
}
