use sakila_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use super::film::FilmRentalCount;

/// A row from the `actor` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// An actor with the total rentals of every film they appear in.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ActorRentalCount {
    pub actor_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub rental_count: i64,
}

/// Response body of the actor detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ActorDetail {
    pub actor: Actor,
    #[serde(rename = "topFilms")]
    pub top_films: Vec<FilmRentalCount>,
}
