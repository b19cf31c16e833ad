//! Step-target models and DTOs.

use combovault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `step_targets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StepTarget {
    pub id: DbId,
    pub step_id: DbId,
    pub target_card_id: DbId,
}

/// DTO for `POST /stepTargets/step/{stepId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStepTarget {
    pub target_card_id: Option<DbId>,
}

/// DTO for `PUT /stepTargets/{targetId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStepTarget {
    pub target_card_id: Option<DbId>,
}
