use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251016_000001_bank::Bank;

static FK_BRANCH_BANK_ID: &str = "fk_branch_bank_id";
static IDX_BRANCH_BANK_ID: &str = "idx_branch_bank_id";
static IDX_BRANCH_CITY: &str = "idx_branch_city";
static IDX_BRANCH_STATE: &str = "idx_branch_state";
static IDX_BRANCH_DISTRICT: &str = "idx_branch_district";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The foreign key is declared inline with the table as SQLite cannot
        // add one to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(string_len(Branch::Ifsc, 11).primary_key())
                    .col(big_integer(Branch::BankId))
                    .col(string_len(Branch::Name, 100))
                    .col(string_len(Branch::Address, 255))
                    .col(string_len(Branch::City, 50))
                    .col(string_len_null(Branch::District, 50))
                    .col(string_len(Branch::State, 50))
                    .col(timestamp(Branch::CreatedAt))
                    .col(timestamp(Branch::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BRANCH_BANK_ID)
                            .from(Branch::Table, Branch::BankId)
                            .to(Bank::Table, Bank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_BRANCH_BANK_ID, Branch::BankId),
            (IDX_BRANCH_CITY, Branch::City),
            (IDX_BRANCH_STATE, Branch::State),
            (IDX_BRANCH_DISTRICT, Branch::District),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Branch::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_BRANCH_DISTRICT,
            IDX_BRANCH_STATE,
            IDX_BRANCH_CITY,
            IDX_BRANCH_BANK_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Branch::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Branch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Branch {
    #[sea_orm(iden = "branches")]
    Table,
    Ifsc,
    BankId,
    Name,
    Address,
    City,
    District,
    State,
    CreatedAt,
    UpdatedAt,
}
