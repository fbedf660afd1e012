//! Service layer for lookups, search and bulk loading.
//!
//! Services sit between the HTTP controllers and the repositories. They validate requests,
//! turn repository results into API shapes through [`crate::server::projection`] and classify
//! database failures into [`Error`] variants.

pub mod bank;
pub mod branch;
pub mod import;
pub mod seed;

use crate::{
    model::api::PageDto,
    server::{data::Paged, error::lookup::LookupError},
};

/// A request for one page of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    /// Number of items per page, always positive
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// 0-based index of the page.
    ///
    /// # Returns
    /// - `Ok(u64)` - Index to hand to the repository
    /// - `Err(LookupError::InvalidPage)` - Page 0 was requested
    fn index(&self) -> Result<u64, LookupError> {
        self.page
            .checked_sub(1)
            .ok_or(LookupError::InvalidPage(self.page))
    }

    /// Builds the response page from repository results.
    ///
    /// Requesting a page past the end is an error, except for page 1 of an empty listing which
    /// is returned with no results.
    fn into_page<T, U>(
        self,
        paged: Paged<T>,
        project: impl FnMut(T) -> U,
    ) -> Result<PageDto<U>, LookupError> {
        if self.page > paged.num_pages.max(1) {
            return Err(LookupError::InvalidPage(self.page));
        }

        Ok(PageDto::new(paged.items, paged.num_items, self.page, paged.num_pages).map(project))
    }
}
