mod create_branch;

use bankdir_test_utils::prelude::*;

use crate::server::{
    data::branch::NewBranch,
    error::{lookup::LookupError, Error},
    service::{
        branch::{BranchSearch, BranchService},
        PageRequest,
    },
};
