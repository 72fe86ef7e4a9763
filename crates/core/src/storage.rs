//! Blob storage for uploaded image files.
//!
//! Handlers depend on the [`BlobStore`] trait object rather than touching the
//! filesystem directly. [`LocalDiskStore`] writes under a configured
//! directory; [`MemoryBlobStore`] keeps blobs in memory for tests.
//!
//! Blobs are keyed by the client-supplied file name with no collision
//! renaming: storing a name that already exists replaces the earlier blob.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::CoreError;

/// A place that stores named byte blobs and hands back a path-like handle.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `name`, replacing any blob with the same name.
    ///
    /// Returns the handle recorded on the owning record (for disk storage,
    /// the file path).
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<String, CoreError>;
}

/// Reduce a client-supplied upload file name to a safe single path component.
///
/// Directory parts (either separator) are stripped, so `../../etc/x.png`
/// becomes `x.png`. Names that are empty or only dots are rejected.
pub fn sanitize_file_name(raw: &str) -> Result<String, CoreError> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name.chars().all(|c| c == '.') {
        return Err(CoreError::Validation(format!(
            "Invalid upload file name '{raw}'"
        )));
    }
    Ok(name.to_string())
}

// ---------------------------------------------------------------------------
// Local disk
// ---------------------------------------------------------------------------

/// Stores blobs as files directly under `root`.
#[derive(Debug, Clone)]
pub struct LocalDiskStore {
    root: PathBuf,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BlobStore for LocalDiskStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<String, CoreError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            CoreError::Storage(format!(
                "Failed to create directory {}: {e}",
                self.root.display()
            ))
        })?;

        let path = self.root.join(name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::warn!(path = %path.display(), "Overwriting existing image file");
        }

        tokio::fs::write(&path, bytes).await.map_err(|e| {
            CoreError::Storage(format!("Failed to write {}: {e}", path.display()))
        })?;

        Ok(path.to_string_lossy().into_owned())
    }
}

// ---------------------------------------------------------------------------
// In memory
// ---------------------------------------------------------------------------

/// Keeps blobs in a map; handles are `{prefix}/{name}`.
#[derive(Debug)]
pub struct MemoryBlobStore {
    prefix: String,
    blobs: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            blobs: Mutex::new(BTreeMap::new()),
        }
    }

    /// Bytes stored under `handle`, if any.
    pub async fn get(&self, handle: &str) -> Option<Vec<u8>> {
        self.blobs.lock().await.get(handle).cloned()
    }

    /// Number of distinct blobs currently held.
    pub async fn len(&self) -> usize {
        self.blobs.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.lock().await.is_empty()
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<String, CoreError> {
        let handle = format!("{}/{name}", self.prefix);
        self.blobs.lock().await.insert(handle.clone(), bytes.to_vec());
        Ok(handle)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
