//! Directory lookup service for banks and their IFSC-coded branches.
//!
//! The [`model`] module holds the JSON shapes returned by the API while [`server`]
//! contains the HTTP surface, lookup services, repositories and bulk import.

pub mod model;
pub mod server;
