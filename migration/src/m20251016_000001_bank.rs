use sea_orm_migration::{prelude::*, schema::*};

static IDX_BANK_NAME: &str = "idx_bank_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bank::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Bank::Id))
                    .col(string_len_uniq(Bank::Name, 100))
                    .col(string_len_null(Bank::Code, 10).unique_key())
                    .col(timestamp(Bank::CreatedAt))
                    .col(timestamp(Bank::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Backs the default name ordering of the bank listing
        manager
            .create_index(
                Index::create()
                    .name(IDX_BANK_NAME)
                    .table(Bank::Table)
                    .col(Bank::Name)
                    .col(Bank::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BANK_NAME)
                    .table(Bank::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bank::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Bank {
    #[sea_orm(iden = "banks")]
    Table,
    Id,
    Name,
    Code,
    CreatedAt,
    UpdatedAt,
}
