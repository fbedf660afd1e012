//! Test fixture modules for database row creation.
//!
//! - `directory` - Banks and branches, plus factory functions for in-memory models

pub mod directory;
