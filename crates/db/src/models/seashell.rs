//! SeaShell entity model and persistence DTO.

use serde::Serialize;
use sqlx::FromRow;
use seashell_core::types::{DbId, Timestamp};

/// A row from the `seashells` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SeaShell {
    pub id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub collected_at: Timestamp,
    pub name: String,
    pub species: String,
    pub description: String,
    pub image_url: String,
}

/// Values for every mutable column.
///
/// Used both to insert a new row and to overwrite an existing one; ids and
/// timestamps are assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSeaShell {
    pub collected_at: Timestamp,
    pub name: String,
    pub species: String,
    pub description: String,
    pub image_url: String,
}
