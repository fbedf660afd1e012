//! Placeholder values for mock banks and branches.

/// Street address given to every mock branch.
pub static MOCK_ADDRESS: &str = "1 Test Road";

/// District given to every mock branch.
pub static MOCK_DISTRICT: &str = "Test District";

/// State given to every mock branch.
pub static MOCK_STATE: &str = "Test State";

/// Page size used when building application state for tests.
pub static TEST_PAGE_SIZE: u64 = 10;
