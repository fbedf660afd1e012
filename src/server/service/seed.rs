//! Fixed sample directory for local development and demos.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        bank::BankRepository,
        branch::{BranchRepository, NewBranch},
    },
    error::Error,
};

/// Sample banks as `(name, code)`
static BANKS: [(&str, &str); 5] = [
    ("State Bank of India", "SBI"),
    ("HDFC Bank", "HDFC"),
    ("ICICI Bank", "ICICI"),
    ("Axis Bank", "AXIS"),
    ("Punjab National Bank", "PNB"),
];

/// A sample branch, linked to its bank through the bank code
struct SampleBranch {
    bank_code: &'static str,
    ifsc: &'static str,
    name: &'static str,
    address: &'static str,
    city: &'static str,
    state: &'static str,
}

static BRANCHES: [SampleBranch; 10] = [
    SampleBranch {
        bank_code: "SBI",
        ifsc: "SBIN0000001",
        name: "Mumbai Main Branch",
        address: "123 Fort Area, Mumbai",
        city: "Mumbai",
        state: "Maharashtra",
    },
    SampleBranch {
        bank_code: "SBI",
        ifsc: "SBIN0000002",
        name: "Delhi Connaught Place",
        address: "456 CP, New Delhi",
        city: "Delhi",
        state: "Delhi",
    },
    SampleBranch {
        bank_code: "HDFC",
        ifsc: "HDFC0000001",
        name: "Bangalore Koramangala",
        address: "789 Koramangala, Bangalore",
        city: "Bangalore",
        state: "Karnataka",
    },
    SampleBranch {
        bank_code: "HDFC",
        ifsc: "HDFC0000002",
        name: "Chennai Anna Nagar",
        address: "321 Anna Nagar, Chennai",
        city: "Chennai",
        state: "Tamil Nadu",
    },
    SampleBranch {
        bank_code: "ICICI",
        ifsc: "ICIC0000001",
        name: "Pune Camp",
        address: "654 Camp Area, Pune",
        city: "Pune",
        state: "Maharashtra",
    },
    SampleBranch {
        bank_code: "ICICI",
        ifsc: "ICIC0000002",
        name: "Hyderabad Gachibowli",
        address: "987 Gachibowli, Hyderabad",
        city: "Hyderabad",
        state: "Telangana",
    },
    SampleBranch {
        bank_code: "AXIS",
        ifsc: "UTIB0000001",
        name: "Kolkata Park Street",
        address: "147 Park Street, Kolkata",
        city: "Kolkata",
        state: "West Bengal",
    },
    SampleBranch {
        bank_code: "AXIS",
        ifsc: "UTIB0000002",
        name: "Ahmedabad CG Road",
        address: "258 CG Road, Ahmedabad",
        city: "Ahmedabad",
        state: "Gujarat",
    },
    SampleBranch {
        bank_code: "PNB",
        ifsc: "PUNB0000001",
        name: "Jaipur MI Road",
        address: "369 MI Road, Jaipur",
        city: "Jaipur",
        state: "Rajasthan",
    },
    SampleBranch {
        bank_code: "PNB",
        ifsc: "PUNB0000002",
        name: "Lucknow Hazratganj",
        address: "741 Hazratganj, Lucknow",
        city: "Lucknow",
        state: "Uttar Pradesh",
    },
];

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the directory with the sample banks and branches.
    ///
    /// Runs in a single transaction, on failure the existing directory is left untouched.
    ///
    /// # Returns
    /// - `Ok((banks, branches))` - Number of banks and branches created
    /// - `Err(Error::ConstraintViolation)` - A sample row conflicted with another
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn seed(&self) -> Result<(u64, u64), Error> {
        let txn = self.db.begin().await?;
        let bank_repo = BankRepository::new(&txn);
        let branch_repo = BranchRepository::new(&txn);

        branch_repo.delete_all().await?;
        bank_repo.delete_all().await?;

        let mut bank_ids = Vec::with_capacity(BANKS.len());
        for (name, code) in BANKS {
            let bank = bank_repo
                .create(None, name, Some(code))
                .await
                .map_err(Error::from_write)?;
            tracing::info!("Created bank: {}", bank.name);
            bank_ids.push((code, bank.id));
        }

        for sample in &BRANCHES {
            let Some(&(_, bank_id)) = bank_ids
                .iter()
                .find(|(code, _)| *code == sample.bank_code)
            else {
                return Err(Error::InternalError(format!(
                    "Sample branch {} references unknown bank code {}",
                    sample.ifsc, sample.bank_code
                )));
            };

            let branch = branch_repo
                .create(NewBranch {
                    ifsc: sample.ifsc.to_string(),
                    bank_id,
                    name: sample.name.to_string(),
                    address: sample.address.to_string(),
                    city: sample.city.to_string(),
                    district: None,
                    state: sample.state.to_string(),
                })
                .await
                .map_err(Error::from_write)?;
            tracing::info!("Created branch: {} ({})", branch.name, branch.ifsc);
        }

        let banks = bank_repo.count().await?;
        let branches = branch_repo.count().await?;

        txn.commit().await?;

        tracing::info!("Seeded {} banks and {} branches", banks, branches);

        Ok((banks, branches))
    }
}
