//! Deck models and DTOs.

use combovault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `decks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deck {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// A deck as returned by the paginated listing, with its combo count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeckListItem {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub combos_count: i64,
}

/// One page of the deck listing.
#[derive(Debug, Serialize)]
pub struct DeckListPage {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub decks: Vec<DeckListItem>,
}

/// Query parameters for `GET /decks`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// DTO for creating a deck. All three fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeck {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating a deck's flat fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDeck {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
