/// Sakila surrogate keys (`film_id`, `actor_id`, `customer_id`) are
/// `SMALLINT UNSIGNED`.
pub type DbId = u16;

/// Timestamps are stored as MySQL `TIMESTAMP` and read back as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
