//! Raw query-string types for API handlers.
//!
//! Handlers extract the query as a list of `(key, value)` pairs, which
//! never fails on repeated or unknown keys. The structs here pick the
//! values they know about, so every malformed value reaches the explicit
//! validation in `sakila_core::params` and comes back as a field-level 400.

use sakila_core::error::CoreError;
use sakila_core::params::{CustomerFilter, FilmSearch, RawCustomerQuery};

/// Query-string pairs in request order, as extracted by
/// `Query<QueryPairs>`.
pub type QueryPairs = Vec<(String, String)>;

/// The first value given for `key`. Later repeats are ignored.
fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// `?q=&page=&limit=` for film search.
#[derive(Debug, Default)]
pub struct FilmSearchQuery {
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<QueryPairs> for FilmSearchQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            q: first(&pairs, "q"),
            page: first(&pairs, "page"),
            limit: first(&pairs, "limit"),
        }
    }
}

impl FilmSearchQuery {
    pub fn validate(&self) -> Result<FilmSearch, CoreError> {
        FilmSearch::parse(
            self.q.as_deref(),
            self.page.as_deref(),
            self.limit.as_deref(),
        )
    }
}

/// `?page=&limit=&customer_id=&first_name=&last_name=` for the customer list.
#[derive(Debug, Default)]
pub struct CustomerListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub customer_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<QueryPairs> for CustomerListQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            page: first(&pairs, "page"),
            limit: first(&pairs, "limit"),
            customer_id: first(&pairs, "customer_id"),
            first_name: first(&pairs, "first_name"),
            last_name: first(&pairs, "last_name"),
        }
    }
}

impl CustomerListQuery {
    pub fn validate(&self) -> Result<CustomerFilter, CoreError> {
        CustomerFilter::parse(RawCustomerQuery {
            page: self.page.as_deref(),
            limit: self.limit.as_deref(),
            customer_id: self.customer_id.as_deref(),
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
        })
    }
}
