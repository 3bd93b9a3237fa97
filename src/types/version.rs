// ABOUTME: Release version validation.
// ABOUTME: A version doubles as an image tag, so it follows the OCI tag grammar.

use std::fmt;
use thiserror::Error;

/// Maximum tag length accepted by OCI registries.
const MAX_TAG_LEN: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseVersionError {
    #[error("version cannot be empty")]
    Empty,

    #[error("version exceeds maximum length of 128 characters")]
    TooLong,

    #[error("version cannot start with '{0}'")]
    InvalidStart(char),

    #[error("invalid character in version: '{0}'")]
    InvalidChar(char),
}

/// The version being released. Used verbatim as the image tag and as the
/// awslogs stream prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    pub fn new(value: &str) -> Result<Self, ReleaseVersionError> {
        let first = value.chars().next().ok_or(ReleaseVersionError::Empty)?;

        if value.len() > MAX_TAG_LEN {
            return Err(ReleaseVersionError::TooLong);
        }

        if first == '.' || first == '-' {
            return Err(ReleaseVersionError::InvalidStart(first));
        }

        for c in value.chars() {
            if !c.is_ascii_alphanumeric() && c != '_' && c != '.' && c != '-' {
                return Err(ReleaseVersionError::InvalidChar(c));
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
