pub mod health;
pub mod seashell;

use axum::Router;

use crate::state::AppState;

/// Build the versioned API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /v1/seashell                                     create (POST), list (GET)
/// /v1/seashell/                                    same, with trailing slash
/// /v1/seashell/{id}                                get, update (PATCH|PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(seashell::router())
}
