use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_PAGE_SIZE: u64 = 10;

/// Runtime configuration read from environment variables.
///
/// # Variables
/// - `DATABASE_URL` - Connection string for PostgreSQL or SQLite (required)
/// - `BIND_ADDRESS` - Address the HTTP server listens on (default `0.0.0.0:8080`)
/// - `PAGE_SIZE` - Number of items per page for listings (default `10`)
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub page_size: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let page_size = match lookup("PAGE_SIZE") {
            None => DEFAULT_PAGE_SIZE,
            Some(value) => match value.parse::<u64>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "PAGE_SIZE".to_string(),
                        reason: format!("expected a positive integer, got {:?}", value),
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            bind_address,
            page_size,
        })
    }
}
