use sakila_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `customer` table, limited to the listed columns.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Customer {
    pub customer_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub active: bool,
}
