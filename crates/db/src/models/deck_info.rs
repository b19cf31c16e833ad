//! Deck-info bundle models: strategic note, key cards, and dangers with
//! their response cards.

use combovault_core::cards::CardRef;
use combovault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A key-card annotation in the `setDeckInfo` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyCardInput {
    pub card_id: DbId,
    pub card_name: String,
    pub description: String,
}

/// A danger annotation in the `setDeckInfo` payload. Each danger owns the
/// list of cards that answer it.
#[derive(Debug, Clone, Deserialize)]
pub struct DangerInput {
    pub card_id: DbId,
    pub card_name: String,
    pub extra_notes: Option<String>,
    #[serde(default)]
    pub responses: Vec<CardRef>,
}

/// The full-replacement payload for `POST /decks/info/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetDeckInfoPayload {
    pub note: Option<String>,
    #[serde(default)]
    pub key_cards: Vec<KeyCardInput>,
    #[serde(default)]
    pub main_dangers: Vec<DangerInput>,
}

impl SetDeckInfoPayload {
    /// Every card reference embedded in the payload: key cards, then
    /// dangers, then each danger's responses.
    pub fn embedded_cards(&self) -> Vec<CardRef> {
        let mut refs: Vec<CardRef> = Vec::new();
        for kc in &self.key_cards {
            refs.push(CardRef {
                card_id: kc.card_id,
                card_name: kc.card_name.clone(),
            });
        }
        for danger in &self.main_dangers {
            refs.push(CardRef {
                card_id: danger.card_id,
                card_name: danger.card_name.clone(),
            });
            refs.extend(danger.responses.iter().cloned());
        }
        refs
    }
}

/// Key-card row joined to the card name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KeyCardView {
    pub card_id: DbId,
    pub card_name: String,
    pub description: String,
}

/// Danger row joined to the card name; responses are attached by the
/// read assembler.
#[derive(Debug, Clone, FromRow)]
pub struct DangerRow {
    pub id: DbId,
    pub card_id: DbId,
    pub card_name: String,
    pub extra_notes: Option<String>,
}

/// Flat danger-response row, keyed by parent danger.
#[derive(Debug, Clone, FromRow)]
pub struct DangerResponseRow {
    pub deck_main_danger_id: DbId,
    pub card_id: DbId,
    pub card_name: String,
}

/// A danger with its responses, as served by `GET /decks/info/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DangerView {
    pub id: DbId,
    pub card_id: DbId,
    pub card_name: String,
    pub extra_notes: Option<String>,
    pub responses: Vec<CardRef>,
}

/// The assembled deck-info view.
#[derive(Debug, Clone, Serialize)]
pub struct DeckInfo {
    pub deck_id: DbId,
    pub name: String,
    pub note: Option<String>,
    pub key_cards: Vec<KeyCardView>,
    pub main_dangers: Vec<DangerView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_cards_covers_key_cards_dangers_and_responses() {
        let payload: SetDeckInfoPayload = serde_json::from_value(serde_json::json!({
            "note": "mull aggressively",
            "key_cards": [{"card_id": 1, "card_name": "Engine", "description": "keep"}],
            "main_dangers": [{
                "card_id": 2,
                "card_name": "Sweeper",
                "extra_notes": null,
                "responses": [{"card_id": 3, "card_name": "Counter"}]
            }]
        }))
        .unwrap();

        let ids: Vec<_> = payload.embedded_cards().iter().map(|c| c.card_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_payload_deserializes() {
        let payload: SetDeckInfoPayload = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(payload.note.is_none());
        assert!(payload.key_cards.is_empty());
        assert!(payload.main_dangers.is_empty());
    }
}
