//! Repository for the `tags` and `combo_tags` tables.

use combovault_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::{ComboTag, Tag};

/// Column list for `tags` queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for tags and combo-tag associations.
pub struct TagRepo;

impl TagRepo {
    /// List all tags.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY id");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// List the tags associated with one combo.
    pub async fn list_by_combo(pool: &PgPool, combo_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT tags.id, tags.name
             FROM tags
             JOIN combo_tags ON tags.id = combo_tags.tag_id
             WHERE combo_tags.combo_id = $1",
        )
        .bind(combo_id)
        .fetch_all(pool)
        .await
    }

    /// Create a tag with a unique name.
    ///
    /// `ON CONFLICT DO NOTHING` makes the duplicate check atomic: `None`
    /// means a tag with that name already exists and no row was added.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name) VALUES ($1)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Rename a tag. Returns the updated row, or `None` if no tag with the
    /// given id exists. Renaming onto an existing name trips the unique
    /// constraint and surfaces as a conflict.
    pub async fn update(pool: &PgPool, id: DbId, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("UPDATE tags SET name = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag and its combo associations. Returns `false` when
    /// nothing matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a combo-tag association row directly.
    pub async fn attach_to_combo(
        pool: &PgPool,
        combo_id: DbId,
        tag_id: DbId,
    ) -> Result<ComboTag, sqlx::Error> {
        sqlx::query_as::<_, ComboTag>(
            "INSERT INTO combo_tags (combo_id, tag_id) VALUES ($1, $2)
             RETURNING combo_id, tag_id",
        )
        .bind(combo_id)
        .bind(tag_id)
        .fetch_one(pool)
        .await
    }
}
