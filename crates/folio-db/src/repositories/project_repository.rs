//! Project repository for insert/list/delete on portfolio entries.
//!
//! The `data` column holds the whole structured payload as JSON; the
//! store only materializes `id`, `slug` and `created_at` as columns.
//! Slug uniqueness is enforced by a UNIQUE index, not by this code.

use crate::{DbError, Result as DbErrorResult};

use folio_core::{Project, ProjectDraft};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a draft; `id` and `created_at` are generated by the store.
    pub async fn insert(&self, draft: &ProjectDraft) -> DbErrorResult<Project> {
        let data = serde_json::to_string(&draft.data).map_err(|e| DbError::RowData {
            message: format!("Failed to serialize project data: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let row = sqlx::query(
            r#"
                INSERT INTO projects (slug, data)
                VALUES (?, ?)
                RETURNING id, slug, data, created_at
            "#,
        )
        .bind(&draft.slug)
        .bind(&data)
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_project(&row)
    }

    /// All projects, most recently created first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, slug, data, created_at
                FROM projects
                ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_project).collect()
    }

    /// Delete by id. Returns false if no row had that id.
    pub async fn delete_by_id(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_project(row: &SqliteRow) -> DbErrorResult<Project> {
        let id: i64 = row.try_get("id")?;
        let slug: String = row.try_get("slug")?;
        let data_json: String = row.try_get("data")?;
        let created_at: i64 = row.try_get("created_at")?;

        let data = serde_json::from_str(&data_json).map_err(|e| DbError::RowData {
            message: format!("Invalid JSON in projects.data: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let created_at = DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::RowData {
            message: "Invalid timestamp in projects.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Project {
            id,
            slug,
            data,
            created_at,
        })
    }
}
