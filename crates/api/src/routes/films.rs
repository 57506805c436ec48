//! Route definitions for films.
//!
//! Mounted at `/films` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Film routes mounted at `/films`.
///
/// Static segments win over the `{id}` capture, so `/search` and `/top`
/// never reach `get_film`.
///
/// ```text
/// GET /top        -> top_films
/// GET /search     -> search_films
/// GET /{id}       -> get_film
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top", get(films::top_films))
        .route("/search", get(films::search_films))
        .route("/{id}", get(films::get_film))
}
