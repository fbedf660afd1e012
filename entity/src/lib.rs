//! SeaORM entities for the bank directory.

pub mod prelude;

pub mod bank;
pub mod branch;
