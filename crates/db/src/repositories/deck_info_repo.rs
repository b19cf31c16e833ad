//! Repository for the deck-info bundle: note, key cards, and dangers with
//! their response cards.
//!
//! The write side is the same full-replacement transaction shape as the
//! full-combo orchestration; the read side batches danger responses with
//! one `= ANY($1)` query and regroups in memory, the same pattern the
//! combo reads use.

use combovault_core::cards::{collect_unique_cards, CardRef};
use combovault_core::grouping::group_by_key;
use combovault_core::types::DbId;
use sqlx::PgPool;

use crate::models::deck_info::{
    DangerResponseRow, DangerRow, DangerView, DeckInfo, KeyCardView, SetDeckInfoPayload,
};

/// Provides the composite read and full-replacement write for deck info.
pub struct DeckInfoRepo;

impl DeckInfoRepo {
    /// Replace a deck's note, key cards, and dangers in one transaction.
    ///
    /// Deletion order respects referential nesting: danger responses go
    /// first (child of child), then dangers, then key cards. All cards
    /// referenced anywhere in the payload are upserted before any row
    /// references them. Returns `Ok(false)` (after rolling back) when the
    /// deck does not exist.
    pub async fn set_info(
        pool: &PgPool,
        deck_id: DbId,
        payload: &SetDeckInfoPayload,
    ) -> Result<bool, sqlx::Error> {
        let embedded = payload.embedded_cards();
        let cards: Vec<CardRef> = collect_unique_cards(embedded.iter());

        let mut tx = pool.begin().await?;

        let updated = sqlx::query("UPDATE decks SET note = $1 WHERE id = $2")
            .bind(&payload.note)
            .bind(deck_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "DELETE FROM deck_danger_responses
             WHERE deck_main_danger_id = ANY(SELECT id FROM deck_main_dangers WHERE deck_id = $1)",
        )
        .bind(deck_id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM deck_main_dangers WHERE deck_id = $1")
            .bind(deck_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM deck_key_cards WHERE deck_id = $1")
            .bind(deck_id)
            .execute(&mut *tx)
            .await?;

        for card in &cards {
            sqlx::query(
                "INSERT INTO cards (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
            )
            .bind(card.card_id)
            .bind(&card.card_name)
            .execute(&mut *tx)
            .await?;
        }

        for key_card in &payload.key_cards {
            sqlx::query(
                "INSERT INTO deck_key_cards (deck_id, card_id, description) VALUES ($1, $2, $3)",
            )
            .bind(deck_id)
            .bind(key_card.card_id)
            .bind(&key_card.description)
            .execute(&mut *tx)
            .await?;
        }

        for danger in &payload.main_dangers {
            let danger_id: DbId = sqlx::query_scalar(
                "INSERT INTO deck_main_dangers (deck_id, card_id, extra_notes)
                 VALUES ($1, $2, $3)
                 RETURNING id",
            )
            .bind(deck_id)
            .bind(danger.card_id)
            .bind(&danger.extra_notes)
            .fetch_one(&mut *tx)
            .await?;

            for response in &danger.responses {
                sqlx::query(
                    "INSERT INTO deck_danger_responses (deck_main_danger_id, card_id)
                     VALUES ($1, $2)",
                )
                .bind(danger_id)
                .bind(response.card_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        tracing::info!(deck_id, "Deck info replaced");
        Ok(true)
    }

    /// Assemble a deck's info view. Returns `None` if the deck does not
    /// exist; a deck with no annotations yields empty arrays, never null.
    pub async fn get_info(pool: &PgPool, deck_id: DbId) -> Result<Option<DeckInfo>, sqlx::Error> {
        let Some((name, note)) = sqlx::query_as::<_, (String, Option<String>)>(
            "SELECT name, note FROM decks WHERE id = $1",
        )
        .bind(deck_id)
        .fetch_optional(pool)
        .await?
        else {
            return Ok(None);
        };

        let key_cards = sqlx::query_as::<_, KeyCardView>(
            "SELECT kc.card_id, c.name AS card_name, kc.description
             FROM deck_key_cards kc
             JOIN cards c ON kc.card_id = c.id
             WHERE kc.deck_id = $1",
        )
        .bind(deck_id)
        .fetch_all(pool)
        .await?;

        let dangers = sqlx::query_as::<_, DangerRow>(
            "SELECT d.id, d.card_id, c.name AS card_name, d.extra_notes
             FROM deck_main_dangers d
             JOIN cards c ON d.card_id = c.id
             WHERE d.deck_id = $1
             ORDER BY d.id",
        )
        .bind(deck_id)
        .fetch_all(pool)
        .await?;

        let mut responses_by_danger = if dangers.is_empty() {
            Default::default()
        } else {
            let danger_ids: Vec<DbId> = dangers.iter().map(|d| d.id).collect();
            let response_rows = sqlx::query_as::<_, DangerResponseRow>(
                "SELECT dr.deck_main_danger_id, dr.card_id, c.name AS card_name
                 FROM deck_danger_responses dr
                 JOIN cards c ON dr.card_id = c.id
                 WHERE dr.deck_main_danger_id = ANY($1)",
            )
            .bind(&danger_ids)
            .fetch_all(pool)
            .await?;
            group_by_key(response_rows, |r| r.deck_main_danger_id)
        };

        let main_dangers = dangers
            .into_iter()
            .map(|danger| DangerView {
                id: danger.id,
                card_id: danger.card_id,
                card_name: danger.card_name,
                extra_notes: danger.extra_notes,
                responses: responses_by_danger
                    .remove(&danger.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|r| CardRef {
                        card_id: r.card_id,
                        card_name: r.card_name,
                    })
                    .collect(),
            })
            .collect();

        Ok(Some(DeckInfo {
            deck_id,
            name,
            note,
            key_cards,
            main_dangers,
        }))
    }
}
