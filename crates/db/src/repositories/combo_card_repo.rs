//! Repository for the standalone starting-hand / final-board append paths.
//!
//! Unlike the orchestrated full-combo writes these paths are not
//! transactional: the card upserts are fired concurrently, awaited, and
//! then the slot inserts are fired concurrently. Statement independence is
//! what allows the fan-out; the upsert barrier between the two waves is
//! what keeps the card foreign keys satisfied.

use combovault_core::types::DbId;
use futures::future::try_join_all;
use sqlx::PgPool;

use crate::models::combo::SlotCard;
use crate::repositories::CardRepo;

/// Provides bulk appends for the ordered combo card lists.
pub struct ComboCardRepo;

impl ComboCardRepo {
    /// Append cards to a combo's starting hand, position = array index.
    pub async fn add_starting_hand(
        pool: &PgPool,
        combo_id: DbId,
        cards: &[SlotCard],
    ) -> Result<(), sqlx::Error> {
        insert_slots(pool, "combo_starting_hand", combo_id, cards).await
    }

    /// Append cards to a combo's final board, position = array index.
    pub async fn add_final_board(
        pool: &PgPool,
        combo_id: DbId,
        cards: &[SlotCard],
    ) -> Result<(), sqlx::Error> {
        insert_slots(pool, "combo_final_board", combo_id, cards).await
    }
}

async fn insert_slots(
    pool: &PgPool,
    table: &str,
    combo_id: DbId,
    cards: &[SlotCard],
) -> Result<(), sqlx::Error> {
    try_join_all(
        cards
            .iter()
            .map(|card| CardRepo::upsert(pool, card.id, &card.name)),
    )
    .await?;

    let insert = format!("INSERT INTO {table} (combo_id, card_id, position) VALUES ($1, $2, $3)");
    try_join_all(cards.iter().enumerate().map(|(position, card)| {
        sqlx::query(&insert)
            .bind(combo_id)
            .bind(card.id)
            .bind(position as i32)
            .execute(pool)
    }))
    .await?;

    Ok(())
}
