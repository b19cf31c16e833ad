//! Repository for the `steps` table.

use combovault_core::grouping::group_by_key;
use combovault_core::types::DbId;
use futures::future::try_join_all;
use sqlx::PgPool;

use crate::models::step::{Step, StepTargetCard, StepWithTargets, UpdateStep};

/// Column list for `steps` queries.
const COLUMNS: &str = "id, card_id, action_text, step_order, combo_id";

/// Provides CRUD operations for combo steps.
pub struct StepRepo;

impl StepRepo {
    /// Fetch a combo's steps in execution order, each with its target
    /// cards attached.
    ///
    /// Targets for all steps come back in one `= ANY($1)` query joined to
    /// the card names, then get regrouped under their steps in memory. No
    /// steps short-circuits to an empty list without a target query.
    pub async fn list_with_targets(
        pool: &PgPool,
        combo_id: DbId,
    ) -> Result<Vec<StepWithTargets>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM steps WHERE combo_id = $1 ORDER BY step_order");
        let steps = sqlx::query_as::<_, Step>(&query)
            .bind(combo_id)
            .fetch_all(pool)
            .await?;

        if steps.is_empty() {
            return Ok(Vec::new());
        }

        let step_ids: Vec<DbId> = steps.iter().map(|s| s.id).collect();

        let target_rows = sqlx::query_as::<_, StepTargetCard>(
            "SELECT st.id, st.step_id, st.target_card_id AS card_id, c.name AS card_name
             FROM step_targets st
             JOIN cards c ON c.id = st.target_card_id
             WHERE st.step_id = ANY($1)",
        )
        .bind(&step_ids)
        .fetch_all(pool)
        .await?;

        let mut targets_by_step = group_by_key(target_rows, |t| t.step_id);

        Ok(steps
            .into_iter()
            .map(|step| {
                let step_targets = targets_by_step.remove(&step.id).unwrap_or_default();
                StepWithTargets { step, step_targets }
            })
            .collect())
    }

    /// Insert a step, then its target rows concurrently.
    ///
    /// The target inserts are independent single statements, so they are
    /// fired together rather than transactionally; a failed target leaves
    /// the created step in place.
    pub async fn create(
        pool: &PgPool,
        combo_id: DbId,
        card_id: DbId,
        action_text: &str,
        step_order: i32,
        target_card_ids: &[DbId],
    ) -> Result<Step, sqlx::Error> {
        let query = format!(
            "INSERT INTO steps (card_id, action_text, step_order, combo_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let step = sqlx::query_as::<_, Step>(&query)
            .bind(card_id)
            .bind(action_text)
            .bind(step_order)
            .bind(combo_id)
            .fetch_one(pool)
            .await?;

        try_join_all(target_card_ids.iter().map(|target_card_id| {
            sqlx::query("INSERT INTO step_targets (step_id, target_card_id) VALUES ($1, $2)")
                .bind(step.id)
                .bind(target_card_id)
                .execute(pool)
        }))
        .await?;

        Ok(step)
    }

    /// Overwrite a step's flat fields. Returns `false` when nothing
    /// matched.
    pub async fn update(
        pool: &PgPool,
        step_id: DbId,
        input: &UpdateStep,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE steps SET card_id = $1, action_text = $2, step_order = $3 WHERE id = $4",
        )
        .bind(input.card_id)
        .bind(&input.action_text)
        .bind(input.step_order)
        .bind(step_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a step. Returns `false` when nothing matched.
    pub async fn delete(pool: &PgPool, step_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM steps WHERE id = $1")
            .bind(step_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
