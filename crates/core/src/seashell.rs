//! Field rules for the seashell record.
//!
//! Constants and pure helpers shared by the persistence layer (column
//! defaults and constraints) and the HTTP layer (form parsing).

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "SeaShell";

/// Placeholder stored when a record is created without a description.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Default offset for the list operation.
pub const DEFAULT_PAGE_OFFSET: i64 = 0;

/// Default row limit for the list operation.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Naive wire format accepted for `collected_at` (interpreted as UTC).
pub const COLLECTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return the supplied description, or the placeholder when absent.
pub fn description_or_default(description: Option<String>) -> String {
    description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

/// Parse a caller-supplied collection date.
///
/// Accepts RFC 3339 (`2024-02-01T14:30:45Z`, any offset) or the naive
/// `2024-02-01T14:30:45` form, which is taken to be UTC.
pub fn parse_collected_at(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, COLLECTED_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            CoreError::Validation(format!(
                "Invalid collected_at '{raw}'. Expected format: YYYY-MM-DDTHH:MM:SS"
            ))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
