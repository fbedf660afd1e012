//! Bank and branch fixture utilities.

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn directory<'a>(&'a self) -> DirectoryFixtures<'a> {
        DirectoryFixtures { setup: self }
    }
}

pub struct DirectoryFixtures<'a> {
    pub setup: &'a TestContext,
}
