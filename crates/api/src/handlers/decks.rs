//! Handlers for the `/decks` resource, including the deck-info bundle.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use combovault_core::types::DbId;
use combovault_core::validation::required_text;
use combovault_db::models::deck::{CreateDeck, Deck, DeckListPage, DeckListParams, UpdateDeck};
use combovault_db::models::deck_info::{DeckInfo, SetDeckInfoPayload};
use combovault_db::repositories::{DeckInfoRepo, DeckRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /decks
///
/// Paginated listing, busiest decks first, each with its combo count.
pub async fn list_decks(
    State(state): State<AppState>,
    Query(params): Query<DeckListParams>,
) -> AppResult<Json<DeckListPage>> {
    let page = DeckRepo::list_paged(&state.pool, &params).await?;
    Ok(Json(page))
}

/// POST /decks
pub async fn create_deck(
    State(state): State<AppState>,
    Json(input): Json<CreateDeck>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let name = required_text(input.name.as_deref())?;
    let description = required_text(input.description.as_deref())?;
    let image_url = required_text(input.image_url.as_deref())?;

    let deck = DeckRepo::create(&state.pool, name, description, image_url).await?;

    tracing::info!(deck_id = deck.id, "Deck created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Deck created successfully")),
    ))
}

/// GET /decks/{id}
pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deck>> {
    let deck = DeckRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Deck", id))?;
    Ok(Json(deck))
}

/// PUT /decks/{id}
pub async fn update_deck(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeck>,
) -> AppResult<Json<MessageResponse>> {
    DeckRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Deck", id))?;

    Ok(Json(MessageResponse::new("Deck updated successfully")))
}

/// DELETE /decks/{id}
pub async fn remove_deck(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !DeckRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Deck", id));
    }

    tracing::info!(deck_id = id, "Deck removed");

    Ok(Json(MessageResponse::new("Deck removed successfully")))
}

/// GET /decks/info/{id}
pub async fn get_deck_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeckInfo>> {
    let info = DeckInfoRepo::get_info(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Deck", id))?;
    Ok(Json(info))
}

/// POST /decks/info/{id}
///
/// Full replacement: the deck's note, key cards, and dangers are rewritten
/// from the payload inside one transaction.
pub async fn set_deck_info(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<SetDeckInfoPayload>,
) -> AppResult<Json<MessageResponse>> {
    if !DeckInfoRepo::set_info(&state.pool, id, &payload).await? {
        return Err(AppError::not_found("Deck", id));
    }

    Ok(Json(MessageResponse::new("Deck info updated successfully")))
}
