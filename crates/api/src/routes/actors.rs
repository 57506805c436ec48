use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Actor routes mounted at `/actors`.
///
/// ```text
/// GET /top        -> top_actors
/// GET /{id}       -> get_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top", get(actors::top_actors))
        .route("/{id}", get(actors::get_actor))
}
