use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Map of the available API routes, keyed by resource
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OverviewDto {
    #[serde(rename = "Banks")]
    pub banks: BankRoutesDto,
    #[serde(rename = "Branches")]
    pub branches: BranchRoutesDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BankRoutesDto {
    #[serde(rename = "List all banks")]
    pub list: String,
    #[serde(rename = "Bank details")]
    pub detail: String,
    #[serde(rename = "Bank branches")]
    pub branches: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BranchRoutesDto {
    #[serde(rename = "List all branches")]
    pub list: String,
    #[serde(rename = "Branch details")]
    pub detail: String,
    #[serde(rename = "Search by IFSC")]
    pub search_by_code: String,
    #[serde(rename = "Search by city")]
    pub search_by_city: String,
}

/// A single page of a paginated listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Number of the next page, if there is one
    pub next: Option<u64>,
    /// Number of the previous page, if there is one
    pub previous: Option<u64>,
    /// Items on this page
    pub results: Vec<T>,
}

impl<T> PageDto<T> {
    /// Builds a page from its results and the position of the page within the listing.
    ///
    /// `page` is 1-based, `num_pages` is the total number of pages for the listing.
    pub fn new(results: Vec<T>, count: u64, page: u64, num_pages: u64) -> Self {
        Self {
            count,
            next: (page < num_pages).then_some(page + 1),
            previous: (page > 1).then(|| page - 1),
            results,
        }
    }

    /// Maps the results of the page while keeping its position.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageDto<U> {
        PageDto {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

impl<T, E> PageDto<Result<T, E>> {
    /// Converts a page of results into a page of values, failing on the first error.
    pub fn transpose(self) -> Result<PageDto<T>, E> {
        Ok(PageDto {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().collect::<Result<Vec<_>, E>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_many_pages_only_links_forward() {
        let page = PageDto::new(vec![1, 2], 5, 1, 3);

        assert_eq!(page.next, Some(2));
        assert_eq!(page.previous, None);
    }

    #[test]
    fn last_page_only_links_back() {
        let page = PageDto::new(vec![5], 5, 3, 3);

        assert_eq!(page.next, None);
        assert_eq!(page.previous, Some(2));
    }

    #[test]
    fn empty_listing_has_no_links() {
        let page: PageDto<i32> = PageDto::new(Vec::new(), 0, 1, 0);

        assert_eq!(page.count, 0);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn transpose_fails_on_first_error() {
        let page: PageDto<Result<i32, &str>> = PageDto::new(vec![Ok(1), Err("bad")], 2, 1, 1);

        assert_eq!(page.transpose().unwrap_err(), "bad");
    }
}
