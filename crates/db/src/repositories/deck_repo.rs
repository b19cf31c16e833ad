//! Repository for the `decks` table.

use combovault_core::types::DbId;
use sqlx::PgPool;

use crate::models::deck::{Deck, DeckListItem, DeckListPage, DeckListParams, UpdateDeck};

/// Column list for `decks` queries.
const COLUMNS: &str = "id, name, description, image_url, note, created_at";

/// Default page size for the deck listing.
const DEFAULT_LIMIT: i64 = 10;

/// Provides CRUD operations for decks.
pub struct DeckRepo;

impl DeckRepo {
    /// Insert a new deck, returning the created row.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: &str,
        image_url: &str,
    ) -> Result<Deck, sqlx::Error> {
        let query = format!(
            "INSERT INTO decks (name, description, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(name)
            .bind(description)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// List decks one page at a time, busiest decks first.
    ///
    /// Each item carries its combo count; decks tie-break alphabetically.
    pub async fn list_paged(
        pool: &PgPool,
        params: &DeckListParams,
    ) -> Result<DeckListPage, sqlx::Error> {
        let page = params.page.unwrap_or(1).max(1);
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).max(1);
        let offset = (page - 1) * limit;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM decks")
            .fetch_one(pool)
            .await?;

        let decks = sqlx::query_as::<_, DeckListItem>(
            "SELECT d.id, d.name, d.description, d.image_url, d.note, d.created_at,
                    COUNT(c.id) AS combos_count
             FROM decks d
             LEFT JOIN combos c ON c.deck_id = d.id
             GROUP BY d.id
             ORDER BY combos_count DESC, d.name ASC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(DeckListPage {
            total: total.0,
            page,
            limit,
            decks,
        })
    }

    /// Find a deck by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Deck>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM decks WHERE id = $1");
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a deck's flat fields. Returns the updated row, or `None` if
    /// no deck with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeck,
    ) -> Result<Option<Deck>, sqlx::Error> {
        let query = format!(
            "UPDATE decks SET
                 name = COALESCE($2, name),
                 description = COALESCE($3, description),
                 image_url = COALESCE($4, image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deck>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a deck. Returns `false` when nothing matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM decks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
