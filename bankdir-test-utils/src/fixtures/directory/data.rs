//! Bank and branch database insertion utilities.
//!
//! Mock inserts create missing parent banks automatically so fixtures always satisfy the
//! foreign key from branches to banks.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{
    constant::{MOCK_ADDRESS, MOCK_DISTRICT, MOCK_STATE},
    error::TestError,
    fixtures::directory::DirectoryFixtures,
    model::{BankModel, BranchModel},
};

impl<'a> DirectoryFixtures<'a> {
    /// Insert a bank with the provided values.
    ///
    /// # Returns
    /// - `Ok(BankModel)` - The created bank
    /// - `Err(TestError::DbErr)` - Insert failed, for example on a duplicate ID or name
    pub async fn insert_bank(
        &self,
        bank_id: i64,
        name: &str,
        code: Option<&str>,
    ) -> Result<BankModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Bank::insert(entity::bank::ActiveModel {
            id: ActiveValue::Set(bank_id),
            name: ActiveValue::Set(name.to_string()),
            code: ActiveValue::Set(code.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock bank named `Mock Bank {bank_id}` without a code.
    ///
    /// If a bank with the ID already exists, returns the existing record instead.
    pub async fn insert_mock_bank(&self, bank_id: i64) -> Result<BankModel, TestError> {
        if let Some(existing_bank) = self.get_bank(bank_id).await? {
            return Ok(existing_bank);
        }

        self.insert_bank(bank_id, &format!("Mock Bank {}", bank_id), None)
            .await
    }

    /// Insert a branch named `name` in `city` for an existing bank.
    pub async fn insert_branch(
        &self,
        ifsc: &str,
        bank_id: i64,
        name: &str,
        city: &str,
    ) -> Result<BranchModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Branch::insert(entity::branch::ActiveModel {
            ifsc: ActiveValue::Set(ifsc.to_string()),
            bank_id: ActiveValue::Set(bank_id),
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(MOCK_ADDRESS.to_string()),
            city: ActiveValue::Set(city.to_string()),
            district: ActiveValue::Set(Some(MOCK_DISTRICT.to_string())),
            state: ActiveValue::Set(MOCK_STATE.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock branch, creating its bank as a mock bank if it doesn't exist.
    ///
    /// The branch is named after its IFSC and located in `Test City`.
    pub async fn insert_mock_branch(
        &self,
        ifsc: &str,
        bank_id: i64,
    ) -> Result<BranchModel, TestError> {
        self.insert_mock_bank(bank_id).await?;

        self.insert_branch(ifsc, bank_id, &format!("Branch {}", ifsc), "Test City")
            .await
    }

    pub async fn get_bank(&self, bank_id: i64) -> Result<Option<BankModel>, TestError> {
        Ok(entity::prelude::Bank::find_by_id(bank_id)
            .one(&self.setup.db)
            .await?)
    }

    pub async fn get_branch(&self, ifsc: &str) -> Result<Option<BranchModel>, TestError> {
        Ok(entity::prelude::Branch::find_by_id(ifsc.to_string())
            .one(&self.setup.db)
            .await?)
    }

    /// Count every branch in the database.
    pub async fn branch_count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Branch::find().count(&self.setup.db).await?)
    }
}
