//! Request handlers, one module per resource.

pub mod combo_cards;
pub mod combo_tags;
pub mod combos;
pub mod decks;
pub mod step_targets;
pub mod steps;
pub mod tags;
