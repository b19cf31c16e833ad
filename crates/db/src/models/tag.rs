//! Tag and combo-tag association models and DTOs.

use combovault_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
}

/// Tag shape embedded in combo detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct TagInfo {
    pub id: DbId,
    pub name: String,
}

/// A row from the `combo_tags` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComboTag {
    pub combo_id: DbId,
    pub tag_id: DbId,
}

/// DTO for creating a tag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: Option<String>,
}

/// DTO for renaming a tag.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTag {
    pub name: Option<String>,
}

/// DTO for `POST /comboTags`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComboTag {
    pub combo_id: Option<DbId>,
    pub tag_id: Option<DbId>,
}
