//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main bankdir crate to keep test signatures consistent.

/// Type alias for the bank database model.
pub type BankModel = entity::bank::Model;

/// Type alias for the branch database model.
pub type BranchModel = entity::branch::Model;
