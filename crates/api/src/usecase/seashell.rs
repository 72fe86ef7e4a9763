//! Seashell use cases.
//!
//! Request shapes here are separate from the persisted
//! [`SeaShell`] row so the wire format can change without touching storage.
//! Each operation validates its request, builds a [`NewSeaShell`] and
//! delegates to [`SeaShellRepo`] on the caller's connection.

use seashell_core::error::CoreError;
use seashell_core::seashell::{description_or_default, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET};
use seashell_core::types::{DbId, Timestamp};
use seashell_db::models::seashell::{NewSeaShell, SeaShell};
use seashell_db::repositories::SeaShellRepo;
use sqlx::SqliteConnection;
use validator::Validate;

use crate::error::AppResult;

// ---------------------------------------------------------------------------
// Request shapes
// ---------------------------------------------------------------------------

/// Input for creating a seashell. `image_url` is the stored upload's handle.
///
/// The 200-character description bound matches `MAX_DESCRIPTION_LEN`.
#[derive(Debug, Clone, Validate)]
pub struct CreateSeaShellReq {
    pub collected_at: Timestamp,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "species must not be empty"))]
    pub species: String,
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: Option<String>,
    pub image_url: String,
}

/// Fully resolved replacement for every mutable field of a seashell.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateSeaShellReq {
    pub collected_at: Timestamp,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "species must not be empty"))]
    pub species: String,
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: String,
    pub image_url: String,
}

/// Partial update: `None` means "keep the current value".
///
/// `image_url` is only `Some` once a replacement upload has been stored.
#[derive(Debug, Clone, Default, Validate)]
pub struct SeaShellPatch {
    pub collected_at: Option<Timestamp>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "species must not be empty"))]
    pub species: Option<String>,
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl SeaShellPatch {
    /// Merge onto `existing`: supplied fields win, omitted fields keep
    /// their current value.
    pub fn resolve(self, existing: &SeaShell) -> UpdateSeaShellReq {
        UpdateSeaShellReq {
            collected_at: self.collected_at.unwrap_or(existing.collected_at),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            species: self.species.unwrap_or_else(|| existing.species.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            image_url: self.image_url.unwrap_or_else(|| existing.image_url.clone()),
        }
    }
}

/// Fixed list window, supplied from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: DEFAULT_PAGE_OFFSET,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Run the derive-based checks, surfacing failures as a 400.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), CoreError> {
    req.validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Create a seashell, defaulting the description when absent.
pub async fn add_seashell(
    conn: &mut SqliteConnection,
    req: CreateSeaShellReq,
) -> AppResult<SeaShell> {
    validate_request(&req)?;
    let input = NewSeaShell {
        collected_at: req.collected_at,
        name: req.name,
        species: req.species,
        description: description_or_default(req.description),
        image_url: req.image_url,
    };
    Ok(SeaShellRepo::create(conn, &input).await?)
}

/// Fetch one seashell; `None` when absent.
pub async fn get_seashell(conn: &mut SqliteConnection, id: DbId) -> AppResult<Option<SeaShell>> {
    Ok(SeaShellRepo::find_by_id(conn, id).await?)
}

/// Fetch the configured window of seashells in insertion order.
pub async fn get_all_seashells(conn: &mut SqliteConnection, page: Page) -> AppResult<Vec<SeaShell>> {
    Ok(SeaShellRepo::list(conn, page.offset, page.limit).await?)
}

/// Overwrite every mutable field of an already-fetched seashell.
pub async fn update_seashell(
    conn: &mut SqliteConnection,
    existing: &SeaShell,
    req: UpdateSeaShellReq,
) -> AppResult<SeaShell> {
    validate_request(&req)?;
    let input = NewSeaShell {
        collected_at: req.collected_at,
        name: req.name,
        species: req.species,
        description: req.description,
        image_url: req.image_url,
    };
    Ok(SeaShellRepo::update(conn, existing, &input).await?)
}

/// Delete an already-fetched seashell, returning its final values.
pub async fn delete_seashell(conn: &mut SqliteConnection, existing: SeaShell) -> AppResult<SeaShell> {
    Ok(SeaShellRepo::delete(conn, existing).await?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
