pub mod app_conf;
pub mod catalog_conf;
pub mod email_conf;
pub mod studio_conf;

pub use catalog_conf::CatalogConfig;
pub use email_conf::EmailConfig;
pub use studio_conf::StudioConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
