//! Repository for the `combos` table and the combo composites.
//!
//! Besides single-row CRUD this module carries the two structurally
//! interesting paths of the system:
//!
//! - the write orchestrations (`create_full`, `update_full`), which persist
//!   a nested combo payload as one transaction with a fixed statement
//!   order: cards are upserted before anything references them, the parent
//!   row before its children, and child deletions run grandchildren-first;
//! - the read assemblers (`get_with_details`, `list_by_deck_with_details`),
//!   which batch-fetch child rows per kind and fold them back under their
//!   parents in memory, so a deck read costs one query per child kind
//!   rather than one per combo.

use combovault_core::cards::{collect_unique_cards, CardRef};
use combovault_core::grouping::group_by_key;
use combovault_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::combo::{
    Combo, ComboCardRow, ComboTagRow, ComboWithDetails, FullComboPayload,
};
use crate::models::tag::TagInfo;

/// Column list for `combos` queries.
const COLUMNS: &str = "id, author, title, difficulty, deck_id, created_at";

/// Provides CRUD and composite operations for combos.
pub struct ComboRepo;

impl ComboRepo {
    // -----------------------------------------------------------------------
    // Single-row CRUD
    // -----------------------------------------------------------------------

    /// Insert a new combo, returning the created row.
    pub async fn create(
        pool: &PgPool,
        deck_id: DbId,
        author: &str,
        title: &str,
        difficulty: &str,
    ) -> Result<Combo, sqlx::Error> {
        let query = format!(
            "INSERT INTO combos (author, title, difficulty, deck_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Combo>(&query)
            .bind(author)
            .bind(title)
            .bind(difficulty)
            .bind(deck_id)
            .fetch_one(pool)
            .await
    }

    /// Find a combo by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Combo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM combos WHERE id = $1");
        sqlx::query_as::<_, Combo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a combo's title and difficulty. Returns `false` when
    /// nothing matched.
    pub async fn update_fields(
        pool: &PgPool,
        id: DbId,
        title: &str,
        difficulty: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE combos SET title = $1, difficulty = $2 WHERE id = $3")
            .bind(title)
            .bind(difficulty)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a combo. Returns `false` when nothing matched. Child rows go
    /// with it via schema cascades.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM combos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Associate an existing tag with a combo.
    pub async fn assign_tag(
        pool: &PgPool,
        combo_id: DbId,
        tag_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO combo_tags (combo_id, tag_id) VALUES ($1, $2)")
            .bind(combo_id)
            .bind(tag_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read assembly
    // -----------------------------------------------------------------------

    /// Fetch one combo with its tags, starting hand, and final board.
    ///
    /// Hand and board keep their write-time array order via
    /// `ORDER BY position`. Returns `None` if the combo does not exist.
    pub async fn get_with_details(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ComboWithDetails>, sqlx::Error> {
        let Some(combo) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let tags = sqlx::query_as::<_, ComboTagRow>(
            "SELECT ct.combo_id, t.id, t.name
             FROM combo_tags ct
             JOIN tags t ON ct.tag_id = t.id
             WHERE ct.combo_id = $1",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let starting_hand = sqlx::query_as::<_, ComboCardRow>(
            "SELECT sh.combo_id, c.id AS card_id, c.name AS card_name
             FROM combo_starting_hand sh
             JOIN cards c ON sh.card_id = c.id
             WHERE sh.combo_id = $1
             ORDER BY sh.position",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let final_board = sqlx::query_as::<_, ComboCardRow>(
            "SELECT fb.combo_id, c.id AS card_id, c.name AS card_name
             FROM combo_final_board fb
             JOIN cards c ON fb.card_id = c.id
             WHERE fb.combo_id = $1
             ORDER BY fb.position",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(ComboWithDetails {
            combo,
            tags: tags
                .into_iter()
                .map(|t| TagInfo { id: t.id, name: t.name })
                .collect(),
            starting_hand: starting_hand
                .into_iter()
                .map(ComboCardRow::into_card_ref)
                .collect(),
            final_board: final_board
                .into_iter()
                .map(ComboCardRow::into_card_ref)
                .collect(),
        }))
    }

    /// Fetch every combo of a deck with details attached.
    ///
    /// Child rows for all combos are fetched with one `= ANY($1)` query per
    /// child kind and regrouped in memory, so the query count stays flat as
    /// the deck grows. An empty deck short-circuits to an empty list
    /// without issuing any child queries.
    pub async fn list_by_deck_with_details(
        pool: &PgPool,
        deck_id: DbId,
    ) -> Result<Vec<ComboWithDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM combos WHERE deck_id = $1 ORDER BY id");
        let combos = sqlx::query_as::<_, Combo>(&query)
            .bind(deck_id)
            .fetch_all(pool)
            .await?;

        if combos.is_empty() {
            return Ok(Vec::new());
        }

        let combo_ids: Vec<DbId> = combos.iter().map(|c| c.id).collect();

        let tag_rows = sqlx::query_as::<_, ComboTagRow>(
            "SELECT ct.combo_id, t.id, t.name
             FROM combo_tags ct
             JOIN tags t ON ct.tag_id = t.id
             WHERE ct.combo_id = ANY($1)",
        )
        .bind(&combo_ids)
        .fetch_all(pool)
        .await?;

        let hand_rows = sqlx::query_as::<_, ComboCardRow>(
            "SELECT sh.combo_id, c.id AS card_id, c.name AS card_name
             FROM combo_starting_hand sh
             JOIN cards c ON sh.card_id = c.id
             WHERE sh.combo_id = ANY($1)
             ORDER BY sh.combo_id, sh.position",
        )
        .bind(&combo_ids)
        .fetch_all(pool)
        .await?;

        let board_rows = sqlx::query_as::<_, ComboCardRow>(
            "SELECT fb.combo_id, c.id AS card_id, c.name AS card_name
             FROM combo_final_board fb
             JOIN cards c ON fb.card_id = c.id
             WHERE fb.combo_id = ANY($1)
             ORDER BY fb.combo_id, fb.position",
        )
        .bind(&combo_ids)
        .fetch_all(pool)
        .await?;

        let mut tags_by_combo = group_by_key(tag_rows, |r| r.combo_id);
        let mut hand_by_combo = group_by_key(hand_rows, |r| r.combo_id);
        let mut board_by_combo = group_by_key(board_rows, |r| r.combo_id);

        Ok(combos
            .into_iter()
            .map(|combo| {
                let id = combo.id;
                ComboWithDetails {
                    combo,
                    tags: tags_by_combo
                        .remove(&id)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|t| TagInfo { id: t.id, name: t.name })
                        .collect(),
                    starting_hand: hand_by_combo
                        .remove(&id)
                        .unwrap_or_default()
                        .into_iter()
                        .map(ComboCardRow::into_card_ref)
                        .collect(),
                    final_board: board_by_combo
                        .remove(&id)
                        .unwrap_or_default()
                        .into_iter()
                        .map(ComboCardRow::into_card_ref)
                        .collect(),
                }
            })
            .collect())
    }

    // -----------------------------------------------------------------------
    // Write orchestration
    // -----------------------------------------------------------------------

    /// Persist a nested combo payload as a single transaction.
    ///
    /// Statement order is load-bearing: referenced cards are upserted
    /// first, then the combo row, then tag associations, ordered hand and
    /// board slots (position = array index), and finally each step with its
    /// targets. Any failure rolls the whole transaction back; no partial
    /// combo is ever observable.
    pub async fn create_full(
        pool: &PgPool,
        deck_id: DbId,
        author: &str,
        title: &str,
        difficulty: &str,
        payload: &FullComboPayload,
    ) -> Result<Combo, sqlx::Error> {
        let cards = collect_unique_cards(payload.embedded_cards());

        let mut tx = pool.begin().await?;

        upsert_cards(&mut tx, &cards).await?;

        let query = format!(
            "INSERT INTO combos (author, title, difficulty, deck_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let combo = sqlx::query_as::<_, Combo>(&query)
            .bind(author)
            .bind(title)
            .bind(difficulty)
            .bind(deck_id)
            .fetch_one(&mut *tx)
            .await?;

        insert_children(&mut tx, combo.id, payload).await?;

        tx.commit().await?;

        tracing::info!(combo_id = combo.id, deck_id, "Full combo created");
        Ok(combo)
    }

    /// Replace a combo wholesale: flat fields overwritten, every child
    /// collection deleted and reinserted from the payload.
    ///
    /// This is full replacement, not patching: children absent from the
    /// payload are gone afterwards, and surviving children come back with
    /// fresh surrogate ids. Returns `Ok(false)` (after rolling back) when
    /// the combo does not exist.
    pub async fn update_full(
        pool: &PgPool,
        combo_id: DbId,
        deck_id: DbId,
        author: &str,
        title: &str,
        difficulty: &str,
        payload: &FullComboPayload,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE combos SET author = $1, title = $2, difficulty = $3, deck_id = $4
             WHERE id = $5",
        )
        .bind(author)
        .bind(title)
        .bind(difficulty)
        .bind(deck_id)
        .bind(combo_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM combo_tags WHERE combo_id = $1")
            .bind(combo_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM combo_starting_hand WHERE combo_id = $1")
            .bind(combo_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM combo_final_board WHERE combo_id = $1")
            .bind(combo_id)
            .execute(&mut *tx)
            .await?;

        // Grandchildren before children: targets reference the step rows.
        sqlx::query(
            "DELETE FROM step_targets
             WHERE step_id = ANY(SELECT id FROM steps WHERE combo_id = $1)",
        )
        .bind(combo_id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM steps WHERE combo_id = $1")
            .bind(combo_id)
            .execute(&mut *tx)
            .await?;

        let cards = collect_unique_cards(payload.embedded_cards());
        upsert_cards(&mut tx, &cards).await?;

        insert_children(&mut tx, combo_id, payload).await?;

        tx.commit().await?;

        tracing::info!(combo_id, deck_id, "Full combo replaced");
        Ok(true)
    }
}

/// Upsert every deduplicated card reference inside the open transaction.
async fn upsert_cards(
    tx: &mut Transaction<'_, Postgres>,
    cards: &[CardRef],
) -> Result<(), sqlx::Error> {
    for card in cards {
        sqlx::query("INSERT INTO cards (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(card.card_id)
            .bind(&card.card_name)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

/// Insert a combo's tag associations, hand/board slots, and steps with
/// their targets. Shared by create and update; the caller has already
/// upserted every referenced card.
async fn insert_children(
    tx: &mut Transaction<'_, Postgres>,
    combo_id: DbId,
    payload: &FullComboPayload,
) -> Result<(), sqlx::Error> {
    for tag_id in &payload.tags {
        sqlx::query("INSERT INTO combo_tags (combo_id, tag_id) VALUES ($1, $2)")
            .bind(combo_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await?;
    }

    for (position, card) in payload.starting_hand.iter().enumerate() {
        sqlx::query(
            "INSERT INTO combo_starting_hand (combo_id, card_id, position) VALUES ($1, $2, $3)",
        )
        .bind(combo_id)
        .bind(card.card_id)
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }

    for (position, card) in payload.final_board.iter().enumerate() {
        sqlx::query(
            "INSERT INTO combo_final_board (combo_id, card_id, position) VALUES ($1, $2, $3)",
        )
        .bind(combo_id)
        .bind(card.card_id)
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }

    for step in &payload.steps {
        let step_id: DbId = sqlx::query_scalar(
            "INSERT INTO steps (card_id, action_text, step_order, combo_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(step.card_id)
        .bind(&step.action_text)
        .bind(step.step_order)
        .bind(combo_id)
        .fetch_one(&mut **tx)
        .await?;

        for target in &step.target_cards {
            sqlx::query("INSERT INTO step_targets (step_id, target_card_id) VALUES ($1, $2)")
                .bind(step_id)
                .bind(target.card_id)
                .execute(&mut **tx)
                .await?;
        }
    }

    Ok(())
}
