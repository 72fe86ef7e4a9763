//! Image upload integrity check.
//!
//! An upload is accepted only when its bytes sniff as a known image format,
//! decode completely, and agree with the MIME type the client declared.
//! The check is structural: pixel content is never inspected.

use image::ImageFormat;

use crate::error::CoreError;

/// MIME type clients send when they do not know the file type.
const OPAQUE_MIME: &str = "application/octet-stream";

/// Facts learned about an upload that passed [`verify_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedImage {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Verify that `bytes` is a well-formed image.
///
/// `declared_mime` is the `Content-Type` of the multipart file part, if any.
/// Rejected when:
/// - the payload is empty or its magic bytes match no image format
/// - the declared type names a different image format, or a non-image type
///   other than `application/octet-stream`
/// - a full decode fails (corrupt, truncated or unsupported)
pub fn verify_image(bytes: &[u8], declared_mime: Option<&str>) -> Result<VerifiedImage, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::InvalidImage("uploaded file is empty".into()));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::InvalidImage("uploaded file is not a recognised image".into()))?;

    check_declared_mime(declared_mime, format)?;

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CoreError::InvalidImage(format!("image failed to decode: {e}")))?;

    Ok(VerifiedImage {
        format,
        width: decoded.width(),
        height: decoded.height(),
    })
}

/// Compare the client's declared MIME type with the sniffed format.
fn check_declared_mime(declared_mime: Option<&str>, detected: ImageFormat) -> Result<(), CoreError> {
    let Some(mime) = declared_mime.map(normalize_mime) else {
        return Ok(());
    };
    if mime.is_empty() || mime == OPAQUE_MIME {
        return Ok(());
    }

    match ImageFormat::from_mime_type(&mime) {
        Some(declared) if declared == detected => Ok(()),
        Some(declared) => Err(CoreError::InvalidImage(format!(
            "declared type {mime} ({declared:?}) does not match file contents ({detected:?})"
        ))),
        // Unrecognised image/* subtypes are trusted to the byte sniff.
        None if mime.starts_with("image/") => Ok(()),
        None => Err(CoreError::InvalidImage(format!(
            "declared type {mime} is not an image type"
        ))),
    }
}

/// Lowercase the MIME essence and drop any parameters (`; charset=...`).
fn normalize_mime(raw: &str) -> String {
    raw.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
