//! Branch lookup and search service.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        branch::{BranchDetailDto, BranchSearchDto, BranchSummaryDto},
    },
    server::{
        data::branch::{BranchRepository, BranchWithBank, NewBranch},
        error::{lookup::LookupError, Error},
        model::db::{BankModel, BranchModel},
        projection,
        service::PageRequest,
    },
};

/// Criteria for a branch search.
///
/// A code search takes precedence, a city fragment is only used when no code was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BranchSearch {
    /// Case-insensitive exact match on the IFSC
    Code(String),
    /// Case-insensitive substring match on the city
    City(String),
}

impl BranchSearch {
    /// Builds search criteria from optional query parameters.
    ///
    /// `ifsc` is an older name for `code` and only used when `code` is absent. Empty values
    /// are treated as absent.
    ///
    /// # Returns
    /// - `Ok(BranchSearch)` - Code search if a code was provided, otherwise city search
    /// - `Err(LookupError::MissingSearchCriteria)` - No parameter was provided
    pub fn from_params(
        code: Option<&str>,
        ifsc: Option<&str>,
        city: Option<&str>,
    ) -> Result<Self, LookupError> {
        let present = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);

        if let Some(code) = present(code).or_else(|| present(ifsc)) {
            Ok(Self::Code(code))
        } else if let Some(city) = present(city) {
            Ok(Self::City(city))
        } else {
            Err(LookupError::MissingSearchCriteria)
        }
    }
}

pub struct BranchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BranchService<'a> {
    /// Creates a new instance of [`BranchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every branch ordered by bank name, branch name and IFSC.
    pub async fn list_branches(
        &self,
        request: PageRequest,
    ) -> Result<PageDto<BranchSummaryDto>, Error> {
        let paged = BranchRepository::new(self.db)
            .list_with_bank(request.index()?, request.size)
            .await?;

        request.into_page(paged, Self::summarize)?.transpose()
    }

    /// Lists the branches of a single bank.
    ///
    /// An unknown bank ID is not an error, it yields an empty first page just like a bank
    /// without branches.
    pub async fn list_branches_for_bank(
        &self,
        bank_id: i64,
        request: PageRequest,
    ) -> Result<PageDto<BranchSummaryDto>, Error> {
        let paged = BranchRepository::new(self.db)
            .list_by_bank_id(bank_id, request.index()?, request.size)
            .await?;

        request.into_page(paged, Self::summarize)?.transpose()
    }

    /// Retrieves a branch by its exact IFSC.
    ///
    /// # Returns
    /// - `Ok(BranchDetailDto)` - The branch with its bank nested
    /// - `Err(Error::LookupError)` - No branch has this IFSC
    /// - `Err(Error::InternalError)` - The branch references a bank that does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_branch(&self, ifsc: &str) -> Result<BranchDetailDto, Error> {
        let Some(result) = BranchRepository::new(self.db).get_with_bank(ifsc).await? else {
            return Err(LookupError::BranchNotFound(ifsc.to_string()).into());
        };

        let (branch, bank) = Self::require_bank(result)?;

        Ok(projection::branch_detail(&branch, &bank))
    }

    /// Searches branches by code or by city.
    ///
    /// # Returns
    /// - `Ok(BranchSearchDto::Branch)` - Detail of the branch matching the code
    /// - `Ok(BranchSearchDto::Branches)` - Summaries of every branch whose city matches
    /// - `Err(Error::LookupError)` - Nothing matched the search
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn search(&self, search: BranchSearch) -> Result<BranchSearchDto, Error> {
        let branch_repo = BranchRepository::new(self.db);

        match search {
            BranchSearch::Code(code) => {
                let result = branch_repo
                    .find_by_code(&code)
                    .await?
                    .ok_or(LookupError::NoSearchMatches)?;
                let (branch, bank) = Self::require_bank(result)?;

                Ok(BranchSearchDto::Branch(projection::branch_detail(
                    &branch, &bank,
                )))
            }
            BranchSearch::City(fragment) => {
                let results = branch_repo.search_by_city(&fragment).await?;
                if results.is_empty() {
                    return Err(LookupError::NoSearchMatches.into());
                }

                let branches = results
                    .into_iter()
                    .map(Self::summarize)
                    .collect::<Result<Vec<_>, Error>>()?;

                Ok(BranchSearchDto::Branches(branches))
            }
        }
    }

    /// Creates a branch for an existing bank.
    ///
    /// # Returns
    /// - `Ok(BranchModel)` - The created branch
    /// - `Err(Error::ConstraintViolation)` - The IFSC is taken or the bank does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_branch(&self, branch: NewBranch) -> Result<BranchModel, Error> {
        BranchRepository::new(self.db)
            .create(branch)
            .await
            .map_err(Error::from_write)
    }

    fn summarize(result: BranchWithBank) -> Result<BranchSummaryDto, Error> {
        let (branch, bank) = Self::require_bank(result)?;

        Ok(projection::branch_summary(&branch, &bank))
    }

    /// Unpacks a joined row, failing if the bank of the branch is missing.
    fn require_bank((branch, bank): BranchWithBank) -> Result<(BranchModel, BankModel), Error> {
        match bank {
            Some(bank) => Ok((branch, bank)),
            None => Err(Error::InternalError(format!(
                "Failed to find bank of branch {}, the foreign key should have prevented this",
                branch.ifsc
            ))),
        }
    }
}
