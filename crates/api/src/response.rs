//! Shared response envelope types for API handlers.
//!
//! Mutating endpoints answer with a human-readable `{ "message": ... }`
//! envelope; the composite create endpoints also echo the created parent
//! row. Using these structs instead of ad-hoc `json!` keeps the wire
//! shapes compile-checked.

use combovault_db::models::combo::Combo;
use combovault_db::models::step::Step;
use serde::Serialize;

/// Standard `{ "message": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Response for the full-combo create: confirmation plus the created row.
#[derive(Debug, Serialize)]
pub struct CreatedCombo {
    pub message: &'static str,
    pub combo: Combo,
}

/// Response for step creation: confirmation plus the created row.
#[derive(Debug, Serialize)]
pub struct CreatedStep {
    pub message: &'static str,
    pub step: Step,
}
