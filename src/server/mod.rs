//! Server application core modules.
//!
//! This module contains all server-side functionality for the bank directory: configuration,
//! database access, lookups and search, projections into API shapes, the HTTP router and the
//! bulk CSV import.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod projection;
pub mod router;
pub mod service;
pub mod startup;
