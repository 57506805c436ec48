//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::Json;
use sakila_core::error::CoreError;
use sakila_db::models::actor::{ActorDetail, ActorRentalCount};
use sakila_db::repositories::ActorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/actors/top
///
/// The five actors whose films were rented most.
pub async fn top_actors(State(state): State<AppState>) -> AppResult<Json<Vec<ActorRentalCount>>> {
    let actors = ActorRepo::top_rented(&state.pool).await?;
    Ok(Json(actors))
}

/// GET /api/actors/{id}
///
/// The actor and their five most rented films. Two sequential queries;
/// the second runs only when the actor exists.
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ActorDetail>> {
    let actor = ActorRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Actor", &id))?;

    let top_films = ActorRepo::top_films(&state.pool, actor.actor_id).await?;

    tracing::debug!(
        actor_id = actor.actor_id,
        films = top_films.len(),
        "Actor detail loaded",
    );

    Ok(Json(ActorDetail { actor, top_films }))
}
