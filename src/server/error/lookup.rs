use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors returned by read-only lookups and searches.
///
/// These are expected outcomes of user input rather than faults, so they are logged at debug
/// level and mapped to 4xx responses.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Bank ID {0} not found")]
    BankNotFound(i64),
    #[error("Branch with IFSC {0:?} not found")]
    BranchNotFound(String),
    #[error("No branches found")]
    NoSearchMatches,
    #[error("Please provide either code or city parameter")]
    MissingSearchCriteria,
    #[error("Invalid page {0}")]
    InvalidPage(u64),
    #[error("Not found: {0}")]
    MalformedPath(String),
    #[error("Invalid query parameters: {0}")]
    MalformedQuery(String),
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        tracing::debug!("Lookup error: {}", self);

        let status = match self {
            Self::MissingSearchCriteria | Self::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            Self::BankNotFound(_)
            | Self::BranchNotFound(_)
            | Self::NoSearchMatches
            | Self::InvalidPage(_)
            | Self::MalformedPath(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
