//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching database rows
//! - `Deserialize` DTOs for the write payloads
//!
//! DTO fields whose absence must surface as a 400 (rather than a rejected
//! body) are `Option` and validated in the handlers via
//! `combovault_core::validation`.

pub mod card;
pub mod combo;
pub mod deck;
pub mod deck_info;
pub mod step;
pub mod step_target;
pub mod tag;
