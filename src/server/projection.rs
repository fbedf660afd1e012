//! Projections from database models to API shapes.
//!
//! Every function here is pure. Callers are expected to have loaded the owning bank together
//! with its branches (a join or a single extra query), projections never fetch anything.

use crate::{
    model::{
        bank::{BankDto, BankWithBranchesDto},
        branch::{BranchDetailDto, BranchSummaryDto},
    },
    server::model::db::{BankModel, BranchModel},
};

pub fn bank_dto(bank: &BankModel) -> BankDto {
    BankDto {
        id: bank.id,
        name: bank.name.clone(),
        code: bank.code.clone(),
        created_at: bank.created_at,
        updated_at: bank.updated_at,
    }
}

/// Summary of a branch for listings, denormalizing the name and code of its bank.
pub fn branch_summary(branch: &BranchModel, bank: &BankModel) -> BranchSummaryDto {
    BranchSummaryDto {
        ifsc: branch.ifsc.clone(),
        name: branch.name.clone(),
        city: branch.city.clone(),
        district: branch.district.clone(),
        state: branch.state.clone(),
        bank_id: bank.id,
        bank_name: bank.name.clone(),
        bank_code: bank.code.clone(),
    }
}

/// Every field of a branch with its bank nested.
pub fn branch_detail(branch: &BranchModel, bank: &BankModel) -> BranchDetailDto {
    BranchDetailDto {
        ifsc: branch.ifsc.clone(),
        name: branch.name.clone(),
        address: branch.address.clone(),
        city: branch.city.clone(),
        district: branch.district.clone(),
        state: branch.state.clone(),
        bank: bank_dto(bank),
        created_at: branch.created_at,
        updated_at: branch.updated_at,
    }
}

/// A bank with the summaries of the branches it owns.
///
/// `branches` must all belong to `bank`.
pub fn bank_with_branches(bank: &BankModel, branches: &[BranchModel]) -> BankWithBranchesDto {
    BankWithBranchesDto {
        id: bank.id,
        name: bank.name.clone(),
        code: bank.code.clone(),
        branch_count: branches.len() as u64,
        branches: branches
            .iter()
            .map(|branch| branch_summary(branch, bank))
            .collect(),
        created_at: bank.created_at,
        updated_at: bank.updated_at,
    }
}
