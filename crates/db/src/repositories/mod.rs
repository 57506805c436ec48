//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&DbPool` as the first argument. Nothing here writes.

pub mod actor_repo;
pub mod customer_repo;
pub mod film_repo;

pub use actor_repo::ActorRepo;
pub use customer_repo::CustomerRepo;
pub use film_repo::FilmRepo;
