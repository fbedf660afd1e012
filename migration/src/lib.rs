pub use sea_orm_migration::prelude::*;

mod m20251016_000001_bank;
mod m20251016_000002_branch;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251016_000001_bank::Migration),
            Box::new(m20251016_000002_branch::Migration),
        ]
    }
}
