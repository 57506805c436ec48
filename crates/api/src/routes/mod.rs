pub mod actors;
pub mod customers;
pub mod films;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /films/top                 top 5 films by rentals
/// /films/search              search by title, actor or category
/// /films/{id}                film detail (digits only)
///
/// /actors/top                top 5 actors by rentals
/// /actors/{id}               actor with top 5 films
///
/// /customers                 filtered, paginated list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/films", films::router())
        .nest("/actors", actors::router())
        .nest("/customers", customers::router())
}
