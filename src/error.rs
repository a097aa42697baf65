use thiserror::Error;

/// Errors for the configuration layer and command line level parsing.
///
/// Volume operations themselves never fail: every numeric input is clamped.

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("Invalid volume value: {0}")]
    InvalidVolume(String),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = ConfigError::Invalid("step must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: step must be positive");

        let err = CliError::InvalidVolume("loud".to_string());
        assert_eq!(err.to_string(), "Invalid volume value: loud");
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}
