use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbBackend, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::{
    data::{fetch_paged, Paged},
    model::db::BankModel,
};

pub struct BankRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BankRepository<'a, C> {
    /// Creates a new instance of [`BankRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new bank
    ///
    /// The ID is assigned by the database unless `id` is provided.
    pub async fn create(
        &self,
        id: Option<i64>,
        name: &str,
        code: Option<&str>,
    ) -> Result<BankModel, DbErr> {
        let now = Utc::now().naive_utc();

        let bank = entity::bank::ActiveModel {
            id: match id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            name: ActiveValue::Set(name.to_string()),
            code: ActiveValue::Set(code.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        bank.insert(self.db).await
    }

    /// Returns the bank with the provided ID, creating it with `name` if it doesn't exist
    ///
    /// The returned flag is `true` when the bank was created by this call.
    pub async fn get_or_create(&self, id: i64, name: &str) -> Result<(BankModel, bool), DbErr> {
        if let Some(bank) = self.get(id).await? {
            return Ok((bank, false));
        }

        let bank = self.create(Some(id), name, None).await?;

        Ok((bank, true))
    }

    pub async fn get(&self, id: i64) -> Result<Option<BankModel>, DbErr> {
        entity::prelude::Bank::find_by_id(id).one(self.db).await
    }

    /// Lists banks ordered by name, one page at a time
    ///
    /// `page_index` is 0-based.
    pub async fn list(&self, page_index: u64, page_size: u64) -> Result<Paged<BankModel>, DbErr> {
        let paginator = entity::prelude::Bank::find()
            .order_by_asc(entity::bank::Column::Name)
            .order_by_asc(entity::bank::Column::Id)
            .paginate(self.db, page_size);

        fetch_paged(paginator, page_index).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Bank::find().count(self.db).await
    }

    /// Deletes a bank along with all of its branches
    ///
    /// Returns OK regardless of the bank existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Bank::delete_by_id(id).exec(self.db).await
    }

    /// Deletes every bank, and through the cascade every branch
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Bank::delete_many().exec(self.db).await
    }

    /// Moves the ID sequence past the highest bank ID
    ///
    /// Needed on PostgreSQL after inserting banks with explicit IDs, otherwise the next
    /// database assigned ID may collide. SQLite derives the next ID from the table itself.
    pub async fn sync_id_sequence(&self) -> Result<(), DbErr> {
        if self.db.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        self.db
            .execute_unprepared(
                "SELECT setval(pg_get_serial_sequence('banks', 'id'), \
                 COALESCE(MAX(id), 0) + 1, false) FROM banks",
            )
            .await?;

        Ok(())
    }
}
