use crate::server::error::{config::ConfigError, AppError};

/// Hourly, at the top of the hour.
const DEFAULT_LIFECYCLE_CRON: &str = "0 0 * * * *";
/// Daily, at 01:00.
const DEFAULT_AUDIT_CRON: &str = "0 0 1 * * *";

pub struct Config {
    pub database_url: String,

    /// Cron expression for the event lifecycle job (6-field, with seconds).
    pub lifecycle_cron: String,
    /// Cron expression for the attendance audit job (6-field, with seconds).
    pub audit_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            lifecycle_cron: std::env::var("LIFECYCLE_CRON")
                .unwrap_or_else(|_| DEFAULT_LIFECYCLE_CRON.to_string()),
            audit_cron: std::env::var("AUDIT_CRON")
                .unwrap_or_else(|_| DEFAULT_AUDIT_CRON.to_string()),
        })
    }
}
