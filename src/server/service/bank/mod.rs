//! Bank lookup service.
//!
//! Read operations return API shapes ready for serialization. The write operations exist for
//! seeding and administration only, they are not exposed over HTTP.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageDto,
        bank::{BankDto, BankWithBranchesDto},
    },
    server::{
        data::{bank::BankRepository, branch::BranchRepository},
        error::{lookup::LookupError, Error},
        model::db::BankModel,
        projection,
        service::PageRequest,
    },
};

pub struct BankService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BankService<'a> {
    /// Creates a new instance of [`BankService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists banks ordered by name.
    ///
    /// # Returns
    /// - `Ok(PageDto<BankDto>)` - The requested page, empty for page 1 when there are no banks
    /// - `Err(Error::LookupError)` - Page 0 or a page past the end was requested
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_banks(&self, request: PageRequest) -> Result<PageDto<BankDto>, Error> {
        let paged = BankRepository::new(self.db)
            .list(request.index()?, request.size)
            .await?;

        Ok(request.into_page(paged, |bank| projection::bank_dto(&bank))?)
    }

    /// Retrieves a bank by ID.
    ///
    /// # Returns
    /// - `Ok(BankDto)` - The bank with the requested ID
    /// - `Err(Error::LookupError)` - No bank has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_bank(&self, bank_id: i64) -> Result<BankDto, Error> {
        let bank = self.find_bank(bank_id).await?;

        Ok(projection::bank_dto(&bank))
    }

    /// Retrieves a bank by ID along with every branch it owns.
    ///
    /// The branches are loaded with a single query for the bank rather than per branch.
    pub async fn get_bank_with_branches(&self, bank_id: i64) -> Result<BankWithBranchesDto, Error> {
        let bank = self.find_bank(bank_id).await?;
        let branches = BranchRepository::new(self.db)
            .get_by_bank_id(bank.id)
            .await?;

        Ok(projection::bank_with_branches(&bank, &branches))
    }

    /// Creates a bank with a database assigned ID.
    ///
    /// # Returns
    /// - `Ok(BankModel)` - The created bank
    /// - `Err(Error::ConstraintViolation)` - The name or code is already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_bank(&self, name: &str, code: Option<&str>) -> Result<BankModel, Error> {
        BankRepository::new(self.db)
            .create(None, name, code)
            .await
            .map_err(Error::from_write)
    }

    /// Deletes a bank and, through the cascade, all of its branches.
    ///
    /// # Returns
    /// - `Ok(true)` - The bank existed and was deleted
    /// - `Ok(false)` - No bank has this ID
    pub async fn delete_bank(&self, bank_id: i64) -> Result<bool, Error> {
        let result = BankRepository::new(self.db)
            .delete(bank_id)
            .await
            .map_err(Error::from_write)?;

        if result.rows_affected > 0 {
            tracing::info!(bank_id = %bank_id, "Deleted bank and its branches");
        }

        Ok(result.rows_affected > 0)
    }

    async fn find_bank(&self, bank_id: i64) -> Result<BankModel, Error> {
        BankRepository::new(self.db)
            .get(bank_id)
            .await?
            .ok_or_else(|| LookupError::BankNotFound(bank_id).into())
    }
}
