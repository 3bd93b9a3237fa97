// ABOUTME: Untagged image names and ECR repository detection.
// ABOUTME: Recognizes <account>.dkr.ecr.<region>.amazonaws.com/<repository> references.

use super::version::ReleaseVersion;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

const ECR_REGISTRY_INFIX: &str = "dkr.ecr.";
const ECR_REGISTRY_SUFFIX: &str = "amazonaws.com/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseImageNameError {
    #[error("image name cannot be empty")]
    Empty,

    #[error("invalid character in image name: {0:?}")]
    InvalidChar(char),

    #[error("image name cannot end with '/'")]
    TrailingSlash,

    #[error("image name must not carry a tag or digest, found {0:?}")]
    HasSuffix(String),
}

/// An image reference without tag or digest, e.g. `nginx` or
/// `123456789012.dkr.ecr.us-east-1.amazonaws.com/app`.
///
/// The deploy appends either `:<version>` or `@<digest>`, so a name that
/// already carries one of those is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName(String);

impl ImageName {
    pub fn parse(input: &str) -> Result<Self, ParseImageNameError> {
        if input.is_empty() {
            return Err(ParseImageNameError::Empty);
        }

        if let Some(c) = input
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ParseImageNameError::InvalidChar(c));
        }

        if input.ends_with('/') {
            return Err(ParseImageNameError::TrailingSlash);
        }

        // A colon before the last slash is a registry port, after it a tag.
        let last_segment = input.rsplit('/').next().unwrap_or(input);
        if last_segment.contains(':') || input.contains('@') {
            return Err(ParseImageNameError::HasSuffix(input.to_string()));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ECR repository this image lives in, if it is hosted on ECR.
    pub fn ecr_repository(&self) -> Option<EcrRepository> {
        EcrRepository::parse(&self.0)
    }

    /// `<name>:<version>`
    pub fn with_tag(&self, version: &ReleaseVersion) -> ImageUri {
        ImageUri(format!("{}:{}", self.0, version))
    }

    /// `<name>@<digest>`
    pub fn with_digest(&self, digest: &str) -> ImageUri {
        ImageUri(format!("{}@{}", self.0, digest))
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A repository in an ECR private registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcrRepository {
    registry_id: String,
    region: String,
    name: String,
}

impl EcrRepository {
    /// Match `<account>.dkr.ecr.<region>.amazonaws.com/<repository>`.
    ///
    /// Account and region are each one or more characters up to the next dot.
    /// Everything after `amazonaws.com/` is the repository path.
    pub fn parse(image: &str) -> Option<Self> {
        let (registry_id, rest) = image.split_once('.')?;
        if registry_id.is_empty() {
            return None;
        }

        let rest = rest.strip_prefix(ECR_REGISTRY_INFIX)?;
        let (region, rest) = rest.split_once('.')?;
        if region.is_empty() {
            return None;
        }

        let name = rest.strip_prefix(ECR_REGISTRY_SUFFIX)?;
        if name.contains('\n') {
            return None;
        }

        Some(Self {
            registry_id: registry_id.to_string(),
            region: region.to_string(),
            name: name.to_string(),
        })
    }

    /// AWS account id that owns the registry.
    pub fn registry_id(&self) -> &str {
        &self.registry_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Repository path, e.g. `team/app`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for EcrRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.registry_id, self.name)
    }
}

/// The concrete image written into the container definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageUri(String);

impl ImageUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this URI pins an immutable digest rather than a tag.
    pub fn is_pinned(&self) -> bool {
        self.0.contains('@')
    }
}

impl fmt::Display for ImageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
