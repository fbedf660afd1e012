//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every HTTP handler and type
//! aliases for the database models produced by the `entity` crate.

pub mod app;
pub mod db;
