//! Repository for the `cards` table.

use combovault_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::Card;

/// Provides upsert and lookup for shared card rows.
pub struct CardRepo;

impl CardRepo {
    /// Insert a card if no row with that external id exists.
    ///
    /// Existing rows are never renamed by this path; the first name a card
    /// arrives under is the one it keeps.
    pub async fn upsert(pool: &PgPool, id: DbId, name: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO cards (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Find a card by its external id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>("SELECT id, name FROM cards WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
