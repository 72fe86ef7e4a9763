//! Request-scoped database connection extractor for Axum handlers.

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use crate::error::AppError;
use crate::state::AppState;

/// One pooled connection, held for the lifetime of a single request.
///
/// The connection goes back to the pool when the handler returns, on every
/// exit path, because it is released on drop:
///
/// ```ignore
/// async fn my_handler(mut conn: DbConn) -> AppResult<Json<()>> {
///     SeaShellRepo::count(&mut conn).await?;
///     Ok(Json(()))
/// }
/// ```
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(DbConn(conn))
    }
}

impl Deref for DbConn {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
