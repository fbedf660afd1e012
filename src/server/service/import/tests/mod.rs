
use bankdir_test_utils::prelude::*;

use crate::server::{
    error::{import::ImportError, Error},
    service::{
        bank::BankService,
        import::{ImportService, ImportSummary},
    },
};

static HEADER: &str = "ifsc,bank_id,branch,address,city,district,state,bank_name\n";

fn csv(rows: &[&str]) -> String {
    let mut data = HEADER.to_string();
    for row in rows {
        data.push_str(row);
        data.push('\n');
    }
    data
}
