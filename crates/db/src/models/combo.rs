//! Combo models and DTOs, including the full-combo composite payload.

use combovault_core::cards::CardRef;
use combovault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::tag::TagInfo;

/// A row from the `combos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Combo {
    pub id: DbId,
    pub author: String,
    pub title: String,
    pub difficulty: String,
    pub deck_id: DbId,
    pub created_at: Timestamp,
}

/// A combo with its nested collections reassembled, as served by the
/// single-combo and by-deck read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ComboWithDetails {
    #[serde(flatten)]
    pub combo: Combo,
    pub tags: Vec<TagInfo>,
    pub starting_hand: Vec<CardRef>,
    pub final_board: Vec<CardRef>,
}

/// DTO for `POST /combos/deck/{deckId}`. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCombo {
    pub author: Option<String>,
    pub title: Option<String>,
    pub difficulty: Option<String>,
}

/// DTO for `PUT /combos/{comboId}`: only the flat fields are mutable here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCombo {
    pub title: Option<String>,
    pub difficulty: Option<String>,
}

/// One step inside a full-combo payload.
#[derive(Debug, Clone, Deserialize)]
pub struct FullComboStep {
    pub card_id: DbId,
    pub action_text: String,
    pub step_order: i32,
    #[serde(default)]
    pub target_cards: Vec<CardRef>,
}

/// The nested payload consumed by the full-combo create/update
/// orchestrations.
///
/// `deck_id`, `author`, `title`, and `difficulty` must be present; the
/// collections all default to empty so partial payloads still describe a
/// complete (if small) combo.
#[derive(Debug, Clone, Deserialize)]
pub struct FullComboPayload {
    #[serde(rename = "deckId")]
    pub deck_id: Option<DbId>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub tags: Vec<DbId>,
    #[serde(default)]
    pub starting_hand: Vec<CardRef>,
    #[serde(default)]
    pub final_board: Vec<CardRef>,
    #[serde(default)]
    pub steps: Vec<FullComboStep>,
}

impl FullComboPayload {
    /// Every card reference embedded anywhere in the payload, in encounter
    /// order: starting hand, then final board, then step targets.
    pub fn embedded_cards(&self) -> impl Iterator<Item = &CardRef> {
        self.starting_hand
            .iter()
            .chain(self.final_board.iter())
            .chain(self.steps.iter().flat_map(|s| s.target_cards.iter()))
    }
}

/// Flat child row used to reassemble tag lists, keyed by parent combo.
#[derive(Debug, Clone, FromRow)]
pub struct ComboTagRow {
    pub combo_id: DbId,
    pub id: DbId,
    pub name: String,
}

/// Flat child row used to reassemble hand/board lists, keyed by parent
/// combo. Rows arrive ordered by `position`.
#[derive(Debug, Clone, FromRow)]
pub struct ComboCardRow {
    pub combo_id: DbId,
    pub card_id: DbId,
    pub card_name: String,
}

impl ComboCardRow {
    pub fn into_card_ref(self) -> CardRef {
        CardRef {
            card_id: self.card_id,
            card_name: self.card_name,
        }
    }
}

/// DTO for the standalone `POST /comboStartingHand` / `POST /comboFinalBoard`
/// paths: a combo id plus the cards to append, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct ComboCardListPayload {
    pub combo_id: Option<DbId>,
    pub cards: Option<Vec<SlotCard>>,
}

/// A card entry in the standalone hand/board payloads, which use
/// `{id, name}` rather than the `{card_id, card_name}` shape of the
/// full-combo payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotCard {
    pub id: DbId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_deserializes_from_wire_shape() {
        let payload: FullComboPayload = serde_json::from_value(serde_json::json!({
            "deckId": 3,
            "author": "alice",
            "title": "T1 kill",
            "difficulty": "hard",
            "tags": [1, 2],
            "starting_hand": [{"card_id": 1, "card_name": "Bolt"}],
            "final_board": [],
            "steps": [{
                "card_id": 1,
                "action_text": "cast",
                "step_order": 0,
                "target_cards": [{"card_id": 2, "card_name": "Wall"}]
            }]
        }))
        .unwrap();

        assert_eq!(payload.deck_id, Some(3));
        assert_eq!(payload.tags, vec![1, 2]);
        assert_eq!(payload.starting_hand.len(), 1);
        assert!(payload.final_board.is_empty());
        assert_eq!(payload.steps[0].target_cards[0].card_id, 2);
    }

    #[test]
    fn absent_collections_default_to_empty() {
        let payload: FullComboPayload = serde_json::from_value(serde_json::json!({
            "deckId": 3,
            "author": "alice",
            "title": "T1 kill",
            "difficulty": "hard"
        }))
        .unwrap();

        assert!(payload.tags.is_empty());
        assert!(payload.starting_hand.is_empty());
        assert!(payload.final_board.is_empty());
        assert!(payload.steps.is_empty());
    }

    #[test]
    fn details_serialize_with_collections_beside_flat_fields() {
        let details = ComboWithDetails {
            combo: Combo {
                id: 5,
                author: "alice".into(),
                title: "T1 kill".into(),
                difficulty: "hard".into(),
                deck_id: 3,
                created_at: chrono::Utc::now(),
            },
            tags: vec![],
            starting_hand: vec![CardRef {
                card_id: 1,
                card_name: "Bolt".into(),
            }],
            final_board: vec![],
        };

        let json = serde_json::to_value(&details).unwrap();
        // Flat combo fields sit beside the collections, not under a nested key.
        assert_eq!(json["id"], 5);
        assert_eq!(json["author"], "alice");
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["starting_hand"][0]["card_name"], "Bolt");
        assert_eq!(json["final_board"], serde_json::json!([]));
    }

    #[test]
    fn embedded_cards_walks_hand_board_then_targets() {
        let payload: FullComboPayload = serde_json::from_value(serde_json::json!({
            "deckId": 1,
            "author": "a",
            "title": "t",
            "difficulty": "easy",
            "starting_hand": [{"card_id": 1, "card_name": "A"}],
            "final_board": [{"card_id": 2, "card_name": "B"}],
            "steps": [{
                "card_id": 1,
                "action_text": "x",
                "step_order": 0,
                "target_cards": [{"card_id": 3, "card_name": "C"}]
            }]
        }))
        .unwrap();

        let ids: Vec<_> = payload.embedded_cards().map(|c| c.card_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
