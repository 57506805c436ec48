pub mod actors;
pub mod customers;
pub mod films;
