#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use image::{ImageBuffer, ImageFormat, Rgb};
use seashell_core::storage::MemoryBlobStore;
use seashell_db::DbPool;
use tower::ServiceExt;

use seashell_api::config::ServerConfig;
use seashell_api::router::build_app_router;
use seashell_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        image_dir: PathBuf::from("unused"),
        page_offset: 0,
        page_limit: 100,
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the production router over `pool`, writing uploads to `blobs`.
pub fn build_test_app(pool: DbPool, blobs: Arc<MemoryBlobStore>) -> Router {
    build_test_app_with(pool, blobs, test_config())
}

pub fn build_test_app_with(pool: DbPool, blobs: Arc<MemoryBlobStore>, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        blobs,
    };
    build_app_router(state, &config)
}

/// Fresh in-memory database plus an empty blob store.
pub async fn setup() -> (DbPool, Arc<MemoryBlobStore>, Router) {
    let pool = seashell_db::create_memory_pool().await.unwrap();
    let blobs = Arc::new(MemoryBlobStore::default());
    let app = build_test_app(pool.clone(), Arc::clone(&blobs));
    (pool, blobs, app)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A small but fully decodable PNG.
pub fn png_bytes() -> Vec<u8> {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(4, 4, Rgb([200, 180, 150]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Hand-built `multipart/form-data` body.
pub struct MultipartBody {
    boundary: &'static str,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "seashell-test-boundary",
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (self.content_type(), self.body)
    }
}

/// A complete, valid create form for `name`.
pub fn seashell_form(name: &str) -> MultipartBody {
    MultipartBody::new()
        .text("name", name)
        .text("species", "snails")
        .text("description", "collected from cox's bazar")
        .text("collected_at", "2024-02-01T14:30:45")
        .file("image", &format!("{name}.png"), "image/png", &png_bytes())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send_form(app: Router, method: Method, uri: &str, form: MultipartBody) -> Response {
    let (content_type, body) = form.finish();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a valid form and return the created record's JSON.
pub async fn create_seashell(app: &Router, name: &str) -> serde_json::Value {
    let response = send_form(app.clone(), Method::POST, "/v1/seashell/", seashell_form(name)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
