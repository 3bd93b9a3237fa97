// ABOUTME: Application-wide error types for ecsdeploy.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::deploy::DeployError;
use crate::types::ReleaseVersionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid release version: {0}")]
    InvalidVersion(#[from] ReleaseVersionError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error("lambda runtime error: {0}")]
    Runtime(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Configuration and input errors can never succeed on retry.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            Error::MissingEnvVar(_) | Error::InvalidConfig(_) | Error::InvalidVersion(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
