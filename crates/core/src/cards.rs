//! Card references embedded in write payloads.
//!
//! Starting hands, final boards, and step target lists all carry
//! `{card_id, card_name}` pairs. Before any referencing row is written the
//! orchestrators upsert the full set of distinct cards, so the dedup pass
//! here runs first on every composite write path.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A card as embedded in a write payload: external id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    pub card_id: DbId,
    pub card_name: String,
}

/// Collect every distinct card reference from an iterator of embedded
/// references, in encounter order.
///
/// Duplicate ids keep the first-seen name. Entries with a non-positive id
/// or blank name are skipped rather than rejected; the payload slot that
/// carried them still gets written and the foreign key reports the problem
/// if the card genuinely does not exist.
pub fn collect_unique_cards<'a, I>(refs: I) -> Vec<CardRef>
where
    I: IntoIterator<Item = &'a CardRef>,
{
    let mut seen: Vec<CardRef> = Vec::new();
    for card in refs {
        if card.card_id <= 0 || card.card_name.trim().is_empty() {
            continue;
        }
        if seen.iter().any(|c| c.card_id == card.card_id) {
            continue;
        }
        seen.push(card.clone());
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: DbId, name: &str) -> CardRef {
        CardRef {
            card_id: id,
            card_name: name.to_string(),
        }
    }

    #[test]
    fn distinct_cards_kept_in_encounter_order() {
        let hand = [card(3, "Bolt"), card(1, "Snare")];
        let board = [card(2, "Wall")];
        let cards = collect_unique_cards(hand.iter().chain(board.iter()));
        assert_eq!(cards, vec![card(3, "Bolt"), card(1, "Snare"), card(2, "Wall")]);
    }

    #[test]
    fn duplicate_id_keeps_first_seen_name() {
        let hand = [card(1, "Bolt")];
        let board = [card(1, "Bolt (alt art)")];
        let cards = collect_unique_cards(hand.iter().chain(board.iter()));
        assert_eq!(cards, vec![card(1, "Bolt")]);
    }

    #[test]
    fn zero_id_skipped() {
        let cards = collect_unique_cards([card(0, "Ghost"), card(4, "Real")].iter());
        assert_eq!(cards, vec![card(4, "Real")]);
    }

    #[test]
    fn blank_name_skipped() {
        let cards = collect_unique_cards([card(5, "  "), card(6, "Named")].iter());
        assert_eq!(cards, vec![card(6, "Named")]);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let cards = collect_unique_cards(std::iter::empty::<&CardRef>());
        assert!(cards.is_empty());
    }

    #[test]
    fn card_ref_deserializes_from_wire_shape() {
        let card: CardRef =
            serde_json::from_value(serde_json::json!({"card_id": 1, "card_name": "Bolt"}))
                .unwrap();
        assert_eq!(card, CardRef { card_id: 1, card_name: "Bolt".into() });
    }
}
