use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the bulk CSV import.
///
/// Only [`ImportError::Open`] and [`ImportError::Header`] abort an import. Row-level variants are
/// logged and the row is skipped so a single bad line does not discard the rest of the file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to open import file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to read CSV header: {0}")]
    Header(#[source] csv::Error),
    #[error("Skipping malformed row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to import branch {ifsc} at line {line}: {source}")]
    Row {
        line: u64,
        ifsc: String,
        #[source]
        source: Box<crate::server::error::Error>,
    },
}
