// ABOUTME: Container registry operations trait.
// ABOUTME: Look up the image a repository holds under a given tag.

use super::shared_types::ImageDetail;
use crate::types::{EcrRepository, ReleaseVersion};
use async_trait::async_trait;

/// Registry lookups. Read-only; never mutates registry state.
#[async_trait]
pub trait RegistryOps: Send + Sync {
    /// Describe the images in `repository` tagged `tag`.
    async fn describe_image(
        &self,
        repository: &EcrRepository,
        tag: &ReleaseVersion,
    ) -> Result<Vec<ImageDetail>, RegistryError>;
}

/// Errors from registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("registry error: {0}")]
    Api(String),
}
