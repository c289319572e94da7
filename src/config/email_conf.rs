use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// SMTP relay settings for the order notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP username; also used as the From address of order emails
    pub smtp_user: String,
    /// SMTP password for authentication
    pub smtp_password: String,
    /// Whether to upgrade the connection with STARTTLS
    pub use_starttls: bool,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl EmailConfig {
    /// Create EmailConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading email configuration from environment variables");

        let smtp_host = env::var("SMTP_HOST").map_err(|_| {
            error!("SMTP_HOST environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_HOST".to_string())
        })?;
        debug!("SMTP host: {}", smtp_host);

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| {
                warn!("SMTP_PORT not set, defaulting to 587");
                "587".to_string()
            })
            .parse::<u16>()
            .map_err(|_| {
                error!("Invalid SMTP_PORT value");
                ConfigError::InvalidValue("Invalid SMTP_PORT value".to_string())
            })?;
        debug!("SMTP port: {}", smtp_port);

        let smtp_user = env::var("SMTP_USER").map_err(|_| {
            error!("SMTP_USER environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_USER".to_string())
        })?;
        debug!("SMTP user: {}", smtp_user);

        let smtp_password = env::var("SMTP_PASSWORD").map_err(|_| {
            error!("SMTP_PASSWORD environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_PASSWORD".to_string())
        })?;
        debug!("SMTP password: [REDACTED]");

        let config = EmailConfig {
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_password,
            use_starttls: true,
            connection_timeout_secs: 30,
        };

        config.validate()?;
        info!("Email configuration loaded successfully");
        Ok(config)
    }

    /// Create EmailConfig for testing
    pub fn from_test_env() -> Self {
        EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_user: "orders@example.com".to_string(),
            smtp_password: "test".to_string(),
            use_starttls: false,
            connection_timeout_secs: 10,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smtp_host.is_empty() {
            error!("SMTP host is empty");
            return Err(ConfigError::ValidationError(
                "SMTP host cannot be empty".to_string(),
            ));
        }

        if self.smtp_port == 0 {
            error!("SMTP port is 0");
            return Err(ConfigError::ValidationError(
                "SMTP port cannot be 0".to_string(),
            ));
        }

        if self.smtp_user.is_empty() {
            error!("SMTP user is empty");
            return Err(ConfigError::ValidationError(
                "SMTP user cannot be empty".to_string(),
            ));
        }

        // The user doubles as the From address, so it has to parse as one.
        if !self.smtp_user.contains('@') {
            error!("SMTP user is not an email address");
            return Err(ConfigError::ValidationError(
                "SMTP user must be an email address".to_string(),
            ));
        }

        if self.smtp_password.is_empty() {
            error!("SMTP password is empty");
            return Err(ConfigError::ValidationError(
                "SMTP password cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_user: "".to_string(),
            smtp_password: "".to_string(),
            use_starttls: true,
            connection_timeout_secs: 30,
        }
    }
}
