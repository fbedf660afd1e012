//! HTTP controller endpoints for the bank directory API.
//!
//! Controllers extract path and query parameters, call into the service layer and return its
//! DTOs as JSON. Every endpoint is read-only and documented for OpenAPI with utoipa.

pub mod bank;
pub mod branch;
pub mod overview;

use axum::extract::FromRequestParts;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{error::Error, service::PageRequest};

/// Path parameters, answering unparsable values with a 404 JSON error.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

/// Query parameters, answering an unparsable query string with a 400 JSON error.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);

/// Pagination query parameters shared by every listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number, defaults to the first page
    pub page: Option<u64>,
}

impl PageParams {
    pub fn into_request(self, page_size: u64) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), page_size)
    }
}
