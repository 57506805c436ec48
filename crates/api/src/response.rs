//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Paginated list envelope: `{ "data": [...], "page": n, "limit": n }`.
///
/// `page` and `limit` echo the values actually applied, defaults included.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    pub page: i64,
    pub limit: i64,
}
