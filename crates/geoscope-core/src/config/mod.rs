//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section has a complete set of defaults so an empty
//! configuration is valid.

pub mod app;
pub mod feeds;
pub mod logging;
pub mod severity;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::feeds::{FeedEndpoint, FeedsConfig};
pub use self::logging::LoggingConfig;
pub use self::severity::{PiecewiseLinear, SeverityConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream feed settings.
    #[serde(default)]
    pub feeds: FeedsConfig,
    /// Severity weights and factor curves.
    #[serde(default)]
    pub severity: SeverityConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `GEOSCOPE__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("GEOSCOPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.feeds.request_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "feeds.request_timeout_seconds must be greater than zero",
            ));
        }
        if self.feeds.retry_attempts > 1 {
            return Err(AppError::configuration(
                "feeds.retry_attempts allows at most one retry",
            ));
        }
        self.severity.validate()
    }
}
