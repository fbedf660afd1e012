//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together, with all operations queued and executed during
//! the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up an in-memory database with the requested tables and mock rows. Methods can be
/// chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    include_directory_tables: bool,

    // Database fixtures to insert
    banks: Vec<i64>,
    branches: Vec<(String, i64)>, // (ifsc, bank_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_directory_tables: false,
            banks: Vec::new(),
            branches: Vec::new(),
        }
    }

    /// Add the bank and branch tables to the test database.
    pub fn with_directory_tables(mut self) -> Self {
        self.include_directory_tables = true;
        self
    }

    /// Insert a mock bank named `Mock Bank {bank_id}` into the database.
    pub fn with_mock_bank(mut self, bank_id: i64) -> Self {
        self.banks.push(bank_id);
        self
    }

    /// Insert a mock branch into the database.
    ///
    /// The owning bank is created as a mock bank if it doesn't exist yet.
    pub fn with_mock_branch(mut self, ifsc: impl Into<String>, bank_id: i64) -> Self {
        self.branches.push((ifsc.into(), bank_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// The directory tables are created first if requested, then banks and branches are
    /// inserted in the order they were declared.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        if self.include_directory_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup
                .with_tables(vec![
                    schema.create_table_from_entity(entity::prelude::Bank),
                    schema.create_table_from_entity(entity::prelude::Branch),
                ])
                .await?;
        }

        // 2. Insert fixtures
        for bank_id in self.banks {
            setup.directory().insert_mock_bank(bank_id).await?;
        }

        for (ifsc, bank_id) in self.branches {
            setup.directory().insert_mock_branch(&ifsc, bank_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
