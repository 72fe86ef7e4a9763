use axum::routing::get;
use axum::Router;

use crate::handlers::seashell;
use crate::state::AppState;

/// Routes for the seashell catalogue.
///
/// ```text
/// POST   /v1/seashell/         -> create
/// GET    /v1/seashell/         -> list
/// GET    /v1/seashell/{id}     -> get_by_id
/// PATCH  /v1/seashell/{id}     -> update
/// PUT    /v1/seashell/{id}     -> update
/// DELETE /v1/seashell/{id}     -> delete
/// ```
///
/// The collection is served with and without the trailing slash.
pub fn router() -> Router<AppState> {
    let collection = get(seashell::list).post(seashell::create);

    Router::new()
        .route("/v1/seashell", collection.clone())
        .route("/v1/seashell/", collection)
        .route(
            "/v1/seashell/{id}",
            get(seashell::get_by_id)
                .patch(seashell::update)
                .put(seashell::update)
                .delete(seashell::delete),
        )
}
