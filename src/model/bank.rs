use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::branch::BranchSummaryDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BankDto {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Bank together with every branch it owns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BankWithBranchesDto {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub branch_count: u64,
    pub branches: Vec<BranchSummaryDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Bank detail, with its branches only when they were requested
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BankDetailDto {
    WithBranches(BankWithBranchesDto),
    Bank(BankDto),
}
