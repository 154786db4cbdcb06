use std::io;

use thiserror::Error;

/// Library-wide error type for provisioning operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required flag, token, or environment variable is absent.
    #[error("Missing {name}: {hint}")]
    MissingConfiguration { name: String, hint: String },

    /// A value to export was found in none of its sources.
    #[error("Could not find {what}.")]
    MissingValue { what: String },

    /// The studio configuration file cannot be found or parsed.
    #[error("Failed to load Sanity config at {path}: {reason}")]
    ConfigLoad { path: String, reason: String },

    /// The remote project-management API rejected a call or could not be reached.
    #[error("Sanity API call '{operation}' failed: {details}")]
    ExternalCall { operation: String, details: String },

    /// A child process could not be spawned or exited non-zero.
    #[error("Stage '{stage}' failed running '{command}': {details}")]
    ChildProcess { stage: String, command: String, details: String },

    /// The configuration or env file could not be written.
    #[error("Failed to write {path}: {details}")]
    Write { path: String, details: String },

    /// Interactive question failed or was cancelled.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn missing<N: Into<String>, H: Into<String>>(name: N, hint: H) -> Self {
        AppError::MissingConfiguration { name: name.into(), hint: hint.into() }
    }

    pub fn not_found<S: Into<String>>(what: S) -> Self {
        AppError::MissingValue { what: what.into() }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
