//! Table bootstrap for the `seashells` table.
//!
//! Run once at startup. The statement is idempotent (`IF NOT EXISTS`), so an
//! existing database is left untouched; there is no versioned migration
//! history.

use seashell_core::seashell::{DEFAULT_DESCRIPTION, MAX_DESCRIPTION_LEN};

use crate::DbPool;

/// Create the `seashells` table if it does not exist.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT keeps ids monotonic, so a deleted id is never reissued.
    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS seashells (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at   TEXT    NOT NULL,
            updated_at   TEXT    NOT NULL,
            collected_at TEXT    NOT NULL,
            name         TEXT    NOT NULL,
            species      TEXT    NOT NULL,
            description  TEXT    NOT NULL DEFAULT '{DEFAULT_DESCRIPTION}'
                         CHECK (length(description) <= {MAX_DESCRIPTION_LEN}),
            image_url    TEXT    NOT NULL
        )"
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::debug!("seashells table ready");
    Ok(())
}
