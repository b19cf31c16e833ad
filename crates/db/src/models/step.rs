//! Step models and DTOs.

use combovault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `steps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub card_id: DbId,
    pub action_text: String,
    pub step_order: i32,
    pub combo_id: DbId,
}

/// A step with its target cards attached, as served by
/// `GET /steps/combo/{comboId}`.
#[derive(Debug, Clone, Serialize)]
pub struct StepWithTargets {
    #[serde(flatten)]
    pub step: Step,
    pub step_targets: Vec<StepTargetCard>,
}

/// Flat target row joined to the card name, keyed by parent step.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StepTargetCard {
    pub id: DbId,
    pub step_id: DbId,
    pub card_id: DbId,
    pub card_name: String,
}

/// DTO for `POST /steps/combo/{comboId}`.
///
/// `card_id`, `action_text`, and `step_order` are required; a zero
/// `step_order` is valid (it is the first step).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStep {
    pub card_id: Option<DbId>,
    pub action_text: Option<String>,
    pub step_order: Option<i32>,
    #[serde(default)]
    pub target_card_ids: Vec<DbId>,
}

/// DTO for `PUT /steps/{stepId}`: replaces the step's flat fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStep {
    pub card_id: DbId,
    pub action_text: String,
    pub step_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_with_targets_flattens_step_fields() {
        let step = StepWithTargets {
            step: Step {
                id: 2,
                card_id: 1,
                action_text: "cast".into(),
                step_order: 0,
                combo_id: 9,
            },
            step_targets: vec![StepTargetCard {
                id: 4,
                step_id: 2,
                card_id: 7,
                card_name: "Wall".into(),
            }],
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["action_text"], "cast");
        assert_eq!(json["step_targets"][0]["card_name"], "Wall");
    }

    #[test]
    fn create_step_defaults_targets_to_empty() {
        let input: CreateStep = serde_json::from_value(serde_json::json!({
            "card_id": 1,
            "action_text": "cast",
            "step_order": 0
        }))
        .unwrap();
        assert!(input.target_card_ids.is_empty());
    }
}
