use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The uploaded bytes failed the image integrity check.
    #[error("Invalid image file: {0}")]
    InvalidImage(String),

    /// Writing a blob to the backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = CoreError::NotFound {
            entity: "SeaShell",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: SeaShell with id 7");
    }

    #[test]
    fn display_invalid_image() {
        let err = CoreError::InvalidImage("truncated".into());
        assert_eq!(err.to_string(), "Invalid image file: truncated");
    }
}
