//! Handlers for the `/films` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use sakila_core::error::CoreError;
use sakila_db::models::film::{FilmDetail, FilmRentalCount, FilmSummary};
use sakila_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::query::{FilmSearchQuery, QueryPairs};
use crate::response::Page;
use crate::state::AppState;

/// GET /api/films/top
///
/// The five most rented films.
pub async fn top_films(State(state): State<AppState>) -> AppResult<Json<Vec<FilmRentalCount>>> {
    let films = FilmRepo::top_rented(&state.pool).await?;
    Ok(Json(films))
}

/// GET /api/films/search?q=&page=&limit=
///
/// Substring search over title, actor name and category name.
pub async fn search_films(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Page<FilmSummary>>> {
    let params = FilmSearchQuery::from(pairs).validate()?;
    let films = FilmRepo::search(&state.pool, &params).await?;

    tracing::debug!(
        q = %params.q,
        page = params.page,
        limit = params.limit,
        results = films.len(),
        "Film search executed",
    );

    Ok(Json(Page {
        data: films,
        page: params.page,
        limit: params.limit,
    }))
}

/// GET /api/films/{id}
///
/// Only digit sequences are film ids; any other segment is a 404.
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FilmDetail>> {
    let film_id = parse_film_id(&id).ok_or_else(|| CoreError::not_found("Film", &id))?;

    let film = FilmRepo::find_detail(&state.pool, film_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Film", film_id))?;

    Ok(Json(film))
}

/// Accept only non-empty ASCII digit strings that fit in a `u64`.
fn parse_film_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
