//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate so signatures across the
//! server do not have to spell out the module path.

/// Type alias for the bank database model.
///
/// # Fields (from `entity::bank::Model`)
/// - `id` - Primary key, auto-assigned or supplied by the bulk import
/// - `name` - Display name, unique
/// - `code` - Short institution code, unique when present
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type BankModel = entity::bank::Model;

/// Type alias for the branch database model.
///
/// # Fields (from `entity::branch::Model`)
/// - `ifsc` - Primary key, 11 character branch code
/// - `bank_id` - Foreign key to the owning bank, deleted along with it
/// - `name` - Branch name
/// - `address` - Street address
/// - `city` - City, searchable by partial match
/// - `district` - District, when known
/// - `state` - State
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type BranchModel = entity::branch::Model;
