use std::sync::Arc;

use seashell_core::storage::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: seashell_db::DbPool,
    /// Server configuration (page window, upload limits).
    pub config: Arc<ServerConfig>,
    /// Where uploaded image files are written.
    pub blobs: Arc<dyn BlobStore>,
}
