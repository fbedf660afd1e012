use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Error raised by the code under test
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}
