//! Queries over `actor` and the films they appear in.

use sakila_core::search::TOP_N;
use sakila_core::types::DbId;

use crate::models::actor::{Actor, ActorRentalCount};
use crate::models::film::FilmRentalCount;
use crate::DbPool;

/// Provides read access to actors.
pub struct ActorRepo;

impl ActorRepo {
    /// The actors whose films were rented most, tie-broken by last name.
    /// Actors without films or rentals count as zero.
    pub async fn top_rented(pool: &DbPool) -> Result<Vec<ActorRentalCount>, sqlx::Error> {
        sqlx::query_as::<_, ActorRentalCount>(
            "SELECT a.actor_id, a.first_name, a.last_name, COUNT(r.rental_id) AS rental_count \
             FROM actor a \
             LEFT JOIN film_actor fa ON fa.actor_id = a.actor_id \
             LEFT JOIN inventory i ON i.film_id = fa.film_id \
             LEFT JOIN rental r ON r.inventory_id = i.inventory_id \
             GROUP BY a.actor_id, a.first_name, a.last_name \
             ORDER BY rental_count DESC, a.last_name ASC \
             LIMIT ?",
        )
        .bind(TOP_N)
        .fetch_all(pool)
        .await
    }

    /// Look up an actor by the id exactly as it appeared in the request path.
    ///
    /// The value is bound as text and compared by MySQL, so any segment that
    /// does not denote an existing id yields `None`.
    pub async fn find_by_id(pool: &DbPool, raw_id: &str) -> Result<Option<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT actor_id, first_name, last_name FROM actor WHERE actor_id = ?",
        )
        .bind(raw_id)
        .fetch_optional(pool)
        .await
    }

    /// The actor's most rented films, tie-broken by title. Films never
    /// rented are included with a zero count.
    pub async fn top_films(
        pool: &DbPool,
        actor_id: DbId,
    ) -> Result<Vec<FilmRentalCount>, sqlx::Error> {
        sqlx::query_as::<_, FilmRentalCount>(
            "SELECT f.film_id, f.title, COUNT(r.rental_id) AS rental_count \
             FROM film_actor fa \
             JOIN film f ON f.film_id = fa.film_id \
             LEFT JOIN inventory i ON i.film_id = f.film_id \
             LEFT JOIN rental r ON r.inventory_id = i.inventory_id \
             WHERE fa.actor_id = ? \
             GROUP BY f.film_id, f.title \
             ORDER BY rental_count DESC, f.title ASC \
             LIMIT ?",
        )
        .bind(actor_id)
        .bind(TOP_N)
        .fetch_all(pool)
        .await
    }
}
