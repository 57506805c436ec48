use axum::routing::get;
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Customer routes mounted at `/customers`.
///
/// ```text
/// GET /           -> list_customers
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(customers::list_customers))
}
