//! Repository for the `step_targets` table.

use combovault_core::types::DbId;
use sqlx::PgPool;

use crate::models::step_target::StepTarget;

/// Column list for `step_targets` queries.
const COLUMNS: &str = "id, step_id, target_card_id";

/// Provides CRUD operations for step targets.
pub struct StepTargetRepo;

impl StepTargetRepo {
    /// List a step's targets.
    pub async fn list_by_step(pool: &PgPool, step_id: DbId) -> Result<Vec<StepTarget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM step_targets WHERE step_id = $1");
        sqlx::query_as::<_, StepTarget>(&query)
            .bind(step_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a target for a step, returning the created row.
    pub async fn create(
        pool: &PgPool,
        step_id: DbId,
        target_card_id: DbId,
    ) -> Result<StepTarget, sqlx::Error> {
        let query = format!(
            "INSERT INTO step_targets (step_id, target_card_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StepTarget>(&query)
            .bind(step_id)
            .bind(target_card_id)
            .fetch_one(pool)
            .await
    }

    /// Point a target at a different card. Returns `false` when nothing
    /// matched.
    pub async fn update(
        pool: &PgPool,
        target_id: DbId,
        target_card_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE step_targets SET target_card_id = $1 WHERE id = $2")
            .bind(target_card_id)
            .bind(target_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a target. Returns `false` when nothing matched.
    pub async fn delete(pool: &PgPool, target_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM step_targets WHERE id = $1")
            .bind(target_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
