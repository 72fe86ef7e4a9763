use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use seashell_core::seashell::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET};

use crate::usecase::seashell::Page;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection string (default: `sqlite://seashell.db?mode=rwc`).
    pub database_url: String,
    /// Directory uploaded images are written to.
    pub image_dir: PathBuf,
    /// Rows skipped by the list endpoint.
    pub page_offset: i64,
    /// Maximum rows returned by the list endpoint.
    pub page_limit: i64,
    /// Request body limit for multipart uploads, in bytes.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `DATABASE_URL`         | `sqlite://seashell.db?mode=rwc`  |
    /// | `IMAGE_DIR`            | `static/images/seashell_images`  |
    /// | `PAGE_OFFSET`          | `0`                              |
    /// | `PAGE_LIMIT`           | `100`                            |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                       |
    ///
    /// Panics on unparseable numeric values so misconfiguration fails fast.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://seashell.db?mode=rwc".into());

        let image_dir = std::env::var("IMAGE_DIR")
            .unwrap_or_else(|_| "static/images/seashell_images".into())
            .into();

        Self {
            host,
            port: env_parse("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            database_url,
            image_dir,
            page_offset: env_parse("PAGE_OFFSET", DEFAULT_PAGE_OFFSET),
            page_limit: env_parse("PAGE_LIMIT", DEFAULT_PAGE_LIMIT),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
        }
    }

    /// The fixed window the list endpoint returns.
    pub fn page(&self) -> Page {
        Page {
            offset: self.page_offset,
            limit: self.page_limit,
        }
    }
}

/// Read `key` and parse it, falling back to `default` when unset.
fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid value: {e}")),
        Err(_) => default,
    }
}
