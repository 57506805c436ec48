//! Handlers for the `/customers` resource.

use axum::extract::{Query, State};
use axum::Json;
use sakila_db::models::customer::Customer;
use sakila_db::repositories::CustomerRepo;

use crate::error::AppResult;
use crate::query::{CustomerListQuery, QueryPairs};
use crate::response::Page;
use crate::state::AppState;

/// GET /api/customers?page=&limit=&customer_id=&first_name=&last_name=
///
/// Filtered, paginated customer list. A filter that matches nothing gives
/// an empty page, not a 404.
pub async fn list_customers(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Page<Customer>>> {
    let filter = CustomerListQuery::from(pairs).validate()?;
    let customers = CustomerRepo::list(&state.pool, &filter).await?;

    tracing::debug!(
        customer_id = ?filter.customer_id,
        first_name = ?filter.first_name,
        last_name = ?filter.last_name,
        results = customers.len(),
        "Customer list executed",
    );

    Ok(Json(Page {
        data: customers,
        page: filter.page,
        limit: filter.limit,
    }))
}
