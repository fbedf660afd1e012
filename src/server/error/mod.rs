//! Error types for the bank directory server.
//!
//! Domain-specific errors (configuration, lookups, import) are aggregated into [`Error`] along
//! with database and I/O failures. All errors implement `IntoResponse` so controllers can return
//! them directly, and use `thiserror` for their `Display` and `Error` implementations.

pub mod config;
pub mod import;
pub mod lookup;

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, import::ImportError, lookup::LookupError},
};

/// Main error type for the bank directory server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Lookup errors (unknown identifiers, empty searches, missing search criteria)
/// - Import errors (unreadable file, malformed or rejected rows)
/// - Constraint violations on write paths (duplicate keys, dangling bank references)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Lookup error (not found, invalid search request, invalid page).
    #[error(transparent)]
    LookupError(#[from] LookupError),
    /// Bulk import error.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// A write violated a uniqueness or referential integrity constraint.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    /// Internal error indicating a bug or a database that does not enforce the schema.
    #[error("Internal error, this indicates a bug or an inconsistent database: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// I/O error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Classifies a database error raised by a write.
    ///
    /// Unique and foreign key violations become [`Error::ConstraintViolation`], anything else is
    /// kept as [`Error::DbErr`].
    pub fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::DbErr(err),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        LookupError::MalformedPath(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        LookupError::MalformedQuery(rejection.body_text()).into()
    }
}

#[cfg(test)]
impl From<Error> for bankdir_test_utils::TestError {
    fn from(err: Error) -> Self {
        Self::Other(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Search without any criteria, malformed query string
/// - 404 Not Found - Unknown bank or branch, search without matches, page out of range,
///   malformed path parameter
/// - 409 Conflict - Constraint violation
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::LookupError(err) => err.into_response(),
            Self::ConstraintViolation(msg) => {
                tracing::debug!("Constraint violation: {}", msg);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Conflicts with an existing record".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message, to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
