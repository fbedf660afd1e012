//! API data transfer objects.
//!
//! These are the serialized shapes returned by the HTTP API. They are produced from database
//! models by the projection functions in [`crate::server::projection`] and never carry
//! database handles or lazy relations.

pub mod api;
pub mod bank;
pub mod branch;
