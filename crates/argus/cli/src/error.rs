//! CLI error types

use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Secrets file error
    #[error("Secrets error: {0}")]
    Secrets(String),

    /// Payload template error
    #[error("Template error: {0}")]
    Template(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Controller error
    #[error(transparent)]
    Controller(#[from] argus_controller::ControllerError),

    /// Provisioning error
    #[error(transparent)]
    Provision(#[from] argus_provision::ProvisionError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
