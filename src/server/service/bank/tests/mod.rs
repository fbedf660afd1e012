mod create_bank;

use bankdir_test_utils::prelude::*;

use crate::server::{
    error::{lookup::LookupError, Error},
    service::{bank::BankService, PageRequest},
};
