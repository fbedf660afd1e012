use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select, SelectTwo,
};

use crate::server::{
    data::{fetch_paged, filter, Paged},
    model::db::{BankModel, BranchModel},
};

/// Fields for a new branch record.
#[derive(Clone, Debug)]
pub struct NewBranch {
    pub ifsc: String,
    pub bank_id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub district: Option<String>,
    pub state: String,
}

/// A branch joined with its owning bank.
///
/// The bank is only `None` if the database does not enforce the foreign key.
pub type BranchWithBank = (BranchModel, Option<BankModel>);

pub struct BranchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BranchRepository<'a, C> {
    /// Creates a new instance of [`BranchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new branch
    ///
    /// # Notes
    /// - The IFSC must not already exist, it is the primary key
    /// - The bank ID must exist in the banks table due to foreign key constraint
    pub async fn create(&self, branch: NewBranch) -> Result<BranchModel, DbErr> {
        let now = Utc::now().naive_utc();

        let branch = entity::branch::ActiveModel {
            ifsc: ActiveValue::Set(branch.ifsc),
            bank_id: ActiveValue::Set(branch.bank_id),
            name: ActiveValue::Set(branch.name),
            address: ActiveValue::Set(branch.address),
            city: ActiveValue::Set(branch.city),
            district: ActiveValue::Set(branch.district),
            state: ActiveValue::Set(branch.state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        branch.insert(self.db).await
    }

    /// Gets a branch and its bank by exact IFSC
    pub async fn get_with_bank(&self, ifsc: &str) -> Result<Option<BranchWithBank>, DbErr> {
        entity::prelude::Branch::find_by_id(ifsc.to_string())
            .find_also_related(entity::prelude::Bank)
            .one(self.db)
            .await
    }

    /// Lists all branches with their banks ordered by bank name then branch name
    ///
    /// `page_index` is 0-based.
    pub async fn list_with_bank(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Result<Paged<BranchWithBank>, DbErr> {
        let paginator = Self::ordered(entity::prelude::Branch::find()).paginate(self.db, page_size);

        fetch_paged(paginator, page_index).await
    }

    /// Lists the branches of a single bank ordered by branch name
    ///
    /// An unknown bank ID yields an empty listing rather than an error.
    pub async fn list_by_bank_id(
        &self,
        bank_id: i64,
        page_index: u64,
        page_size: u64,
    ) -> Result<Paged<BranchWithBank>, DbErr> {
        let paginator = Self::ordered(
            entity::prelude::Branch::find().filter(entity::branch::Column::BankId.eq(bank_id)),
        )
        .paginate(self.db, page_size);

        fetch_paged(paginator, page_index).await
    }

    /// Gets every branch of a bank ordered by branch name, without joining the bank
    pub async fn get_by_bank_id(&self, bank_id: i64) -> Result<Vec<BranchModel>, DbErr> {
        entity::prelude::Branch::find()
            .filter(entity::branch::Column::BankId.eq(bank_id))
            .order_by_asc(entity::branch::Column::Name)
            .order_by_asc(entity::branch::Column::Ifsc)
            .all(self.db)
            .await
    }

    /// Finds the branch whose IFSC matches `code` ignoring case
    pub async fn find_by_code(&self, code: &str) -> Result<Option<BranchWithBank>, DbErr> {
        entity::prelude::Branch::find()
            .filter(filter::ifsc_equals_ignore_case(code))
            .find_also_related(entity::prelude::Bank)
            .order_by_asc(entity::branch::Column::Ifsc)
            .one(self.db)
            .await
    }

    /// Finds every branch whose city contains `fragment` ignoring case
    pub async fn search_by_city(&self, fragment: &str) -> Result<Vec<BranchWithBank>, DbErr> {
        Self::ordered(
            entity::prelude::Branch::find().filter(filter::city_contains_ignore_case(fragment)),
        )
        .all(self.db)
        .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Branch::find().count(self.db).await
    }

    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Branch::delete_many().exec(self.db).await
    }

    /// Joins the owning bank and applies the default branch ordering
    fn ordered(
        query: Select<entity::branch::Entity>,
    ) -> SelectTwo<entity::branch::Entity, entity::bank::Entity> {
        query
            .find_also_related(entity::prelude::Bank)
            .order_by_asc(entity::bank::Column::Name)
            .order_by_asc(entity::branch::Column::Name)
            .order_by_asc(entity::branch::Column::Ifsc)
    }
}
