//! Repository for the `customer` table.

use sakila_core::params::CustomerFilter;
use sakila_core::search::contains_pattern;

use crate::models::customer::Customer;
use crate::DbPool;

/// Column list for `customer` queries.
const COLUMNS: &str = "customer_id, first_name, last_name, email, active";

/// Provides read access to customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// One page of customers matching every filter that is set, ordered by
    /// last name then first name.
    ///
    /// An unset filter binds `NULL`, which the `? IS NULL OR ...` guards
    /// turn into no constraint.
    pub async fn list(
        pool: &DbPool,
        filter: &CustomerFilter,
    ) -> Result<Vec<Customer>, sqlx::Error> {
        let first_name = filter.first_name.as_deref().map(contains_pattern);
        let last_name = filter.last_name.as_deref().map(contains_pattern);
        let page = filter.pagination();

        let query = format!(
            "SELECT {COLUMNS} FROM customer \
             WHERE (? IS NULL OR customer_id = ?) \
               AND (? IS NULL OR first_name LIKE ?) \
               AND (? IS NULL OR last_name LIKE ?) \
             ORDER BY last_name, first_name, customer_id \
             LIMIT ? OFFSET ?"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(filter.customer_id)
            .bind(filter.customer_id)
            .bind(&first_name)
            .bind(&first_name)
            .bind(&last_name)
            .bind(&last_name)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }
}
