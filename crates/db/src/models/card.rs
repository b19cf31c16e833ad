//! Card models.
//!
//! Cards carry caller-supplied external ids and are shared by every owner
//! that references them; write paths upsert them by value and never rename
//! an existing row.

use combovault_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub name: String,
}
