//! Domain types shared by the database and HTTP layers.
//!
//! Holds the error taxonomy, request parameter parsing and validation, and
//! the pagination / search helpers. No I/O lives here.

pub mod error;
pub mod params;
pub mod search;
pub mod types;
pub mod validation;
