//! Shared response envelope for API handlers.
//!
//! Every successful response is `{ "message": ..., "data": ... }`. Use
//! [`Envelope`] instead of ad-hoc `serde_json::json!` so the shape is
//! checked at compile time.

use serde::Serialize;

/// Standard `{ "message": String, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::new("Seashells retrieved successfully", rows)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}
