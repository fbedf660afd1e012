use sea_orm::DatabaseConnection;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Number of items per page for paginated listings
    pub page_size: u64,
}

impl From<(DatabaseConnection, u64)> for AppState {
    fn from((db, page_size): (DatabaseConnection, u64)) -> Self {
        Self { db, page_size }
    }
}
