//! Row structs for the Sakila tables this service reads.
//!
//! Each submodule holds `FromRow` + `Serialize` structs shaped exactly like
//! the JSON the API returns for that entity.

pub mod actor;
pub mod customer;
pub mod film;
