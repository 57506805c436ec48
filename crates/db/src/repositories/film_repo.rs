//! Queries over `film` and its join relations.

use sakila_core::params::FilmSearch;
use sakila_core::search::{contains_pattern, TOP_N};

use crate::models::film::{FilmDetail, FilmRentalCount, FilmSummary};
use crate::DbPool;

/// Provides read access to films.
pub struct FilmRepo;

impl FilmRepo {
    /// The most rented films, tie-broken by title.
    ///
    /// Both joins are outer so films without inventory or rentals count as
    /// zero instead of disappearing.
    pub async fn top_rented(pool: &DbPool) -> Result<Vec<FilmRentalCount>, sqlx::Error> {
        sqlx::query_as::<_, FilmRentalCount>(
            "SELECT f.film_id, f.title, COUNT(r.rental_id) AS rental_count \
             FROM film f \
             LEFT JOIN inventory i ON i.film_id = f.film_id \
             LEFT JOIN rental r ON r.inventory_id = i.inventory_id \
             GROUP BY f.film_id, f.title \
             ORDER BY rental_count DESC, f.title ASC \
             LIMIT ?",
        )
        .bind(TOP_N)
        .fetch_all(pool)
        .await
    }

    /// Films whose title, any actor's full name, or any category name
    /// contains the search text.
    ///
    /// Matching relies on the schema's case-insensitive collation. Results
    /// are ordered by title with the id as a final key so pages never
    /// overlap.
    pub async fn search(
        pool: &DbPool,
        params: &FilmSearch,
    ) -> Result<Vec<FilmSummary>, sqlx::Error> {
        let pattern = contains_pattern(&params.q);
        let page = params.pagination();
        sqlx::query_as::<_, FilmSummary>(
            "SELECT DISTINCT f.film_id, f.title \
             FROM film f \
             LEFT JOIN film_actor fa ON fa.film_id = f.film_id \
             LEFT JOIN actor a ON a.actor_id = fa.actor_id \
             LEFT JOIN film_category fc ON fc.film_id = f.film_id \
             LEFT JOIN category c ON c.category_id = fc.category_id \
             WHERE f.title LIKE ? \
                OR CONCAT(a.first_name, ' ', a.last_name) LIKE ? \
                OR c.name LIKE ? \
             ORDER BY f.title, f.film_id \
             LIMIT ? OFFSET ?",
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool)
        .await
    }

    /// Full film record with its categories (alphabetical) and actors
    /// (by last name). Returns `None` if no film has this id.
    pub async fn find_detail(
        pool: &DbPool,
        film_id: u64,
    ) -> Result<Option<FilmDetail>, sqlx::Error> {
        sqlx::query_as::<_, FilmDetail>(
            "SELECT f.film_id, f.title, f.description, \
                    CAST(f.release_year AS SIGNED) AS release_year, \
                    f.language_id, f.original_language_id, f.rental_duration, \
                    CAST(f.rental_rate AS CHAR) AS rental_rate, \
                    f.length, \
                    CAST(f.replacement_cost AS CHAR) AS replacement_cost, \
                    CAST(f.rating AS CHAR) AS rating, \
                    CAST(f.special_features AS CHAR) AS special_features, \
                    f.last_update, \
                    GROUP_CONCAT(DISTINCT c.name ORDER BY c.name) AS categories, \
                    GROUP_CONCAT(DISTINCT CONCAT(a.first_name, ' ', a.last_name) \
                                 ORDER BY a.last_name) AS actors \
             FROM film f \
             LEFT JOIN film_category fc ON fc.film_id = f.film_id \
             LEFT JOIN category c ON c.category_id = fc.category_id \
             LEFT JOIN film_actor fa ON fa.film_id = f.film_id \
             LEFT JOIN actor a ON a.actor_id = fa.actor_id \
             WHERE f.film_id = ? \
             GROUP BY f.film_id",
        )
        .bind(film_id)
        .fetch_optional(pool)
        .await
    }
}
