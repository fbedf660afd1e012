//! Test utilities for the bank directory.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the tables and fixtures a test needs
//! and `build()` turns them into a [`TestContext`] backed by an in-memory SQLite database. During
//! the test, [`TestContext::directory`] offers helpers for inserting and inspecting rows.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::directory::factory;

pub mod prelude {
    pub use crate::{factory, TestBuilder, TestContext, TestError};
}
