//! Bulk load of banks and branches from the public IFSC CSV dataset.
//!
//! An import replaces the whole directory. Existing rows are cleared in a single transaction,
//! after which rows are inserted one by one on a best-effort basis: a row that cannot be parsed
//! or inserted is logged and skipped.

#[cfg(test)]
mod tests;

use std::{collections::HashSet, io::Read, path::Path};

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::server::{
    data::{
        bank::BankRepository,
        branch::{BranchRepository, NewBranch},
    },
    error::{import::ImportError, Error},
};

static PROGRESS_INTERVAL: u64 = 1000;

/// One row of the import file.
///
/// Columns are matched by header name, so their order in the file does not matter.
#[derive(Debug, Deserialize)]
struct ImportRow {
    ifsc: String,
    bank_id: i64,
    branch: String,
    address: String,
    city: String,
    district: Option<String>,
    state: String,
    bank_name: String,
}

impl ImportRow {
    fn into_branch(self) -> NewBranch {
        NewBranch {
            ifsc: self.ifsc,
            bank_id: self.bank_id,
            name: self.branch,
            address: self.address,
            city: self.city,
            district: self.district.filter(|d| !d.is_empty()),
            state: self.state,
        }
    }
}

/// Counts reported once an import completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub banks_created: u64,
    pub branches_created: u64,
    pub rows_skipped: u64,
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    /// Creates a new instance of [`ImportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the directory with the contents of the CSV file at `path`.
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Import completed, possibly with skipped rows
    /// - `Err(Error::ImportError)` - The file could not be opened or has no readable header
    /// - `Err(Error::DbErr)` - Clearing existing data failed, nothing was changed
    pub async fn import_file(&self, path: &Path) -> Result<ImportSummary, Error> {
        let reader = csv::Reader::from_path(path).map_err(|source| ImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Importing bank directory from {}", path.display());

        self.import(reader).await
    }

    /// Replaces the directory with CSV data read from `input`.
    pub async fn import_reader<R: Read>(&self, input: R) -> Result<ImportSummary, Error> {
        self.import(csv::Reader::from_reader(input)).await
    }

    async fn import<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<ImportSummary, Error> {
        let headers = reader.headers().map_err(ImportError::Header)?.clone();

        self.clear().await?;

        let bank_repo = BankRepository::new(self.db);
        let branch_repo = BranchRepository::new(self.db);

        let mut summary = ImportSummary::default();
        let mut known_banks = HashSet::new();

        for (idx, record) in reader.records().enumerate() {
            // Line 1 holds the header
            let line = idx as u64 + 2;

            let row = match record.and_then(|r| r.deserialize::<ImportRow>(Some(&headers))) {
                Ok(row) => row,
                Err(source) => {
                    tracing::warn!("{}", ImportError::MalformedRow { line, source });
                    summary.rows_skipped += 1;
                    continue;
                }
            };

            if !known_banks.contains(&row.bank_id) {
                match bank_repo.get_or_create(row.bank_id, &row.bank_name).await {
                    Ok((bank, created)) => {
                        if created {
                            tracing::info!("Created bank: {} (ID: {})", bank.name, bank.id);
                            summary.banks_created += 1;
                        }
                        known_banks.insert(bank.id);
                    }
                    Err(err) => {
                        Self::skip_row(&mut summary, line, row.ifsc, Error::from_write(err));
                        continue;
                    }
                }
            }

            let ifsc = row.ifsc.clone();
            match branch_repo.create(row.into_branch()).await {
                Ok(_) => {
                    summary.branches_created += 1;
                    if summary.branches_created % PROGRESS_INTERVAL == 0 {
                        tracing::info!("Created {} branches...", summary.branches_created);
                    }
                }
                Err(err) => Self::skip_row(&mut summary, line, ifsc, Error::from_write(err)),
            }
        }

        bank_repo.sync_id_sequence().await?;

        tracing::info!(
            "Imported {} banks and {} branches, skipped {} rows",
            summary.banks_created,
            summary.branches_created,
            summary.rows_skipped
        );

        Ok(summary)
    }

    /// Deletes every branch and bank, all or nothing.
    async fn clear(&self) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let branches = BranchRepository::new(&txn).delete_all().await?;
        let banks = BankRepository::new(&txn).delete_all().await?;

        txn.commit().await?;

        tracing::info!(
            "Cleared {} existing banks and {} branches",
            banks.rows_affected,
            branches.rows_affected
        );

        Ok(())
    }

    fn skip_row(summary: &mut ImportSummary, line: u64, ifsc: String, source: Error) {
        let err = ImportError::Row {
            line,
            ifsc,
            source: Box::new(source),
        };
        tracing::warn!("{}", err);
        summary.rows_skipped += 1;
    }
}
