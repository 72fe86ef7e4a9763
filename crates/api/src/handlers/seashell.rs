//! Handlers for the `/v1/seashell` resource.
//!
//! Create and update accept `multipart/form-data` with the text fields
//! `name`, `species`, `description`, `collected_at` and a file part named
//! `image`. Uploads are verified before anything is written, so a rejected
//! request leaves neither a file nor a row behind.

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use seashell_core::error::CoreError;
use seashell_core::seashell::{parse_collected_at, ENTITY};
use seashell_core::storage::sanitize_file_name;
use seashell_core::types::DbId;
use seashell_core::upload::verify_image;
use seashell_db::models::seashell::SeaShell;

use crate::error::{AppError, AppResult};
use crate::middleware::db_conn::DbConn;
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::seashell::{self as usecase, validate_request, CreateSeaShellReq, SeaShellPatch};

// ---------------------------------------------------------------------------
// Form parsing
// ---------------------------------------------------------------------------

/// A file part as received from the client.
#[derive(Debug)]
struct ImageUpload {
    file_name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// Every field a create or update form may carry; absent parts are `None`.
#[derive(Debug, Default)]
struct SeaShellForm {
    name: Option<String>,
    species: Option<String>,
    description: Option<String>,
    collected_at: Option<String>,
    image: Option<ImageUpload>,
}

/// Drain the multipart body into a [`SeaShellForm`]. Unknown parts are ignored.
///
/// Text values are trimmed, so a whitespace-only `name` or `species` reaches
/// validation as empty and is rejected there.
async fn read_form(multipart: &mut Multipart) -> AppResult<SeaShellForm> {
    let mut form = SeaShellForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // Browsers send an empty part when no file was picked.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "name" | "species" | "description" | "collected_at" | "collection_at" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let slot = match name.as_str() {
                    "name" => &mut form.name,
                    "species" => &mut form.species,
                    "description" => &mut form.description,
                    _ => &mut form.collected_at,
                };
                let text = text.trim();
                // A blank description is the same as leaving it out.
                *slot = if name == "description" && text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                };
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required '{field}' field")))
}

/// Verify an upload and write it to blob storage, returning its handle.
async fn store_image(state: &AppState, upload: ImageUpload) -> AppResult<String> {
    // Full decode is CPU-bound; keep it off the async workers.
    let bytes = upload.bytes.clone();
    let content_type = upload.content_type.clone();
    let verified = tokio::task::spawn_blocking(move || verify_image(&bytes, content_type.as_deref()))
        .await
        .map_err(|e| AppError::InternalError(format!("Image verification task failed: {e}")))??;
    let file_name = sanitize_file_name(&upload.file_name)?;

    let handle = state.blobs.put(&file_name, &upload.bytes).await?;
    tracing::info!(
        file_name = %file_name,
        format = ?verified.format,
        width = verified.width,
        height = verified.height,
        bytes = upload.bytes.len(),
        "Stored seashell image"
    );
    Ok(handle)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/seashell/
///
/// Requires `name`, `species`, `collected_at` and `image`; `description`
/// is optional.
pub async fn create(
    State(state): State<AppState>,
    mut conn: DbConn,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Envelope<SeaShell>>)> {
    let form = read_form(&mut multipart).await?;

    let collected_at = parse_collected_at(&required(form.collected_at, "collected_at")?)?;
    let mut req = CreateSeaShellReq {
        collected_at,
        name: required(form.name, "name")?,
        species: required(form.species, "species")?,
        description: form.description,
        image_url: String::new(),
    };
    let upload = form
        .image
        .ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;

    // Reject bad text fields before the upload touches storage.
    validate_request(&req)?;
    req.image_url = store_image(&state, upload).await?;

    let seashell = usecase::add_seashell(&mut conn, req).await?;
    tracing::info!(seashell_id = seashell.id, name = %seashell.name, "Seashell created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new("Seashell created successfully", seashell)),
    ))
}

/// GET /v1/seashell/
///
/// Returns the configured offset/limit window in insertion order.
pub async fn list(
    State(state): State<AppState>,
    mut conn: DbConn,
) -> AppResult<Json<Envelope<Vec<SeaShell>>>> {
    let seashells = usecase::get_all_seashells(&mut conn, state.config.page()).await?;
    Ok(Json(Envelope::new(
        "Seashells retrieved successfully",
        seashells,
    )))
}

/// GET /v1/seashell/{id}
pub async fn get_by_id(
    mut conn: DbConn,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<SeaShell>>> {
    let seashell = usecase::get_seashell(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(Envelope::new("Seashell retrieved successfully", seashell)))
}

/// PATCH|PUT /v1/seashell/{id}
///
/// Fields omitted from the form keep their current value. The image is only
/// replaced when a new file part is supplied. Existence is checked before
/// the body is read.
pub async fn update(
    State(state): State<AppState>,
    mut conn: DbConn,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<Envelope<SeaShell>>> {
    let existing = usecase::get_seashell(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let form = read_form(&mut multipart).await?;
    let mut patch = SeaShellPatch {
        collected_at: form
            .collected_at
            .as_deref()
            .map(parse_collected_at)
            .transpose()?,
        name: form.name,
        species: form.species,
        description: form.description,
        image_url: None,
    };

    validate_request(&patch)?;
    if let Some(upload) = form.image {
        patch.image_url = Some(store_image(&state, upload).await?);
    }

    let resolved = patch.resolve(&existing);
    let seashell = usecase::update_seashell(&mut conn, &existing, resolved).await?;
    tracing::info!(seashell_id = seashell.id, "Seashell updated");

    Ok(Json(Envelope::new("Seashell updated successfully", seashell)))
}

/// DELETE /v1/seashell/{id}
///
/// Responds with the record as it was before deletion. The image file is
/// left on disk.
pub async fn delete(
    mut conn: DbConn,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<SeaShell>>> {
    let existing = usecase::get_seashell(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let seashell = usecase::delete_seashell(&mut conn, existing).await?;
    tracing::info!(seashell_id = seashell.id, "Seashell deleted");

    Ok(Json(Envelope::new("Seashell deleted successfully", seashell)))
}
