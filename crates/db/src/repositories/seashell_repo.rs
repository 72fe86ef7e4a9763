//! Repository for the `seashells` table.

use chrono::Utc;
use seashell_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::seashell::{NewSeaShell, SeaShell};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, created_at, updated_at, collected_at, name, species, description, image_url";

/// Provides CRUD operations for seashells.
pub struct SeaShellRepo;

impl SeaShellRepo {
    /// Insert a new seashell, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &NewSeaShell,
    ) -> Result<SeaShell, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO seashells
                (created_at, updated_at, collected_at, name, species, description, image_url)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeaShell>(&query)
            .bind(now)
            .bind(now)
            .bind(input.collected_at)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a seashell by its ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<SeaShell>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seashells WHERE id = ?");
        sqlx::query_as::<_, SeaShell>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List seashells in insertion order, skipping `offset` rows and
    /// returning at most `limit`.
    pub async fn list(
        conn: &mut SqliteConnection,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<SeaShell>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seashells ORDER BY id ASC LIMIT ? OFFSET ?");
        sqlx::query_as::<_, SeaShell>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
    }

    /// Overwrite every mutable column of `existing` and refresh `updated_at`.
    ///
    /// The caller must have fetched `existing` already. If the row has since
    /// been deleted this returns [`sqlx::Error::RowNotFound`].
    pub async fn update(
        conn: &mut SqliteConnection,
        existing: &SeaShell,
        input: &NewSeaShell,
    ) -> Result<SeaShell, sqlx::Error> {
        let query = format!(
            "UPDATE seashells SET
                collected_at = ?,
                name = ?,
                species = ?,
                description = ?,
                image_url = ?,
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeaShell>(&query)
            .bind(input.collected_at)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(Utc::now())
            .bind(existing.id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Delete `existing` and hand it back as confirmation.
    ///
    /// Returns [`sqlx::Error::RowNotFound`] if the row was removed after
    /// `existing` was fetched.
    pub async fn delete(
        conn: &mut SqliteConnection,
        existing: SeaShell,
    ) -> Result<SeaShell, sqlx::Error> {
        let result = sqlx::query("DELETE FROM seashells WHERE id = ?")
            .bind(existing.id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(seashell_id = existing.id, "Row already gone at delete time");
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(existing)
    }

    /// Total number of rows.
    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM seashells")
            .fetch_one(&mut *conn)
            .await
    }
}
