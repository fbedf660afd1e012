//! In-memory models for tests that don't need a database.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    constant::{MOCK_ADDRESS, MOCK_DISTRICT, MOCK_STATE},
    model::{BankModel, BranchModel},
};

/// Fixed timestamp used for every mock model so assertions are deterministic.
pub fn mock_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Create a bank model with test timestamps.
pub fn mock_bank_model(bank_id: i64, name: &str, code: Option<&str>) -> BankModel {
    BankModel {
        id: bank_id,
        name: name.to_string(),
        code: code.map(str::to_string),
        created_at: mock_timestamp(),
        updated_at: mock_timestamp(),
    }
}

/// Create a branch model in `city` with placeholder name, address and state.
pub fn mock_branch_model(ifsc: &str, bank_id: i64, city: &str) -> BranchModel {
    BranchModel {
        ifsc: ifsc.to_string(),
        bank_id,
        name: format!("{} Branch", city),
        address: MOCK_ADDRESS.to_string(),
        city: city.to_string(),
        district: Some(MOCK_DISTRICT.to_string()),
        state: MOCK_STATE.to_string(),
        created_at: mock_timestamp(),
        updated_at: mock_timestamp(),
    }
}
