use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::bank::BankDto;

/// Branch as shown in listings, with the owning bank denormalized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BranchSummaryDto {
    pub ifsc: String,
    pub name: String,
    pub city: String,
    pub district: Option<String>,
    pub state: String,
    pub bank_id: i64,
    pub bank_name: String,
    pub bank_code: Option<String>,
}

/// Branch with every field and the owning bank nested
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BranchDetailDto {
    pub ifsc: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub district: Option<String>,
    pub state: String,
    pub bank: BankDto,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Result of a branch search.
///
/// A code search serializes as `{"branch": {...}}` with the detail of the single match, a city
/// search as `{"branches": [...]}` with a summary of every match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BranchSearchDto {
    Branch(BranchDetailDto),
    Branches(Vec<BranchSummaryDto>),
}
