//! Film rows: rankings, search hits and the full detail record.

use sakila_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A film with its total number of rentals.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct FilmRentalCount {
    pub film_id: DbId,
    pub title: String,
    pub rental_count: i64,
}

/// A film matched by search.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct FilmSummary {
    pub film_id: DbId,
    pub title: String,
}

/// Every column of `film` plus the aggregated category and actor names.
///
/// Money columns are `DECIMAL` in the schema and are read as their exact
/// decimal text. `categories` and `actors` are comma-joined and `None` when
/// the film has no such relation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct FilmDetail {
    pub film_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    pub language_id: u8,
    pub original_language_id: Option<u8>,
    pub rental_duration: u8,
    pub rental_rate: String,
    pub length: Option<u16>,
    pub replacement_cost: String,
    pub rating: Option<String>,
    pub special_features: Option<String>,
    pub last_update: Timestamp,
    pub categories: Option<String>,
    pub actors: Option<String>,
}
