// ABOUTME: Error types for deployment steps with SNAFU context selectors.
// ABOUTME: Every variant names the failed operation and the resource it targeted.

use snafu::Snafu;

use crate::aws::{RegistryError, ServiceError, TaskDefinitionError};

/// Errors that end a deployment. Nothing is retried or rolled back.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DeployError {
    #[snafu(display("registry lookup for {image} failed: {source}"))]
    ImageLookup { image: String, source: RegistryError },

    #[snafu(display("no digest found for {repository}:{tag}"))]
    ImageNotFound { repository: String, tag: String },

    #[snafu(display("failed to describe task definition {family}: {source}"))]
    DescribeTaskDefinition {
        family: String,
        source: TaskDefinitionError,
    },

    #[snafu(display("task definition {task_definition} has no family"))]
    MissingFamily { task_definition: String },

    #[snafu(display("task definition {family} has no container definitions"))]
    NoContainers { family: String },

    #[snafu(display("failed to register new revision of {family}: {source}"))]
    RegisterTaskDefinition {
        family: String,
        source: TaskDefinitionError,
    },

    #[snafu(display(
        "failed to update service {service} in cluster {cluster} to {task_definition} \
         (the new revision stays registered): {source}"
    ))]
    UpdateService {
        cluster: String,
        service: String,
        task_definition: String,
        source: ServiceError,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    /// The registry lookup call failed.
    Registry,
    /// Digest pinning was requested but no digest exists for the tag.
    ImageNotFound,
    /// The current task definition could not be fetched.
    DescribeTaskDefinition,
    /// The fetched task definition cannot be re-registered.
    InvalidTaskDefinition,
    /// ECS refused the new revision.
    Registration,
    /// ECS refused to point the service at the new revision.
    ServiceUpdate,
}

impl DeployError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::ImageLookup { .. } => DeployErrorKind::Registry,
            DeployError::ImageNotFound { .. } => DeployErrorKind::ImageNotFound,
            DeployError::DescribeTaskDefinition { .. } => DeployErrorKind::DescribeTaskDefinition,
            DeployError::MissingFamily { .. } | DeployError::NoContainers { .. } => {
                DeployErrorKind::InvalidTaskDefinition
            }
            DeployError::RegisterTaskDefinition { .. } => DeployErrorKind::Registration,
            DeployError::UpdateService { .. } => DeployErrorKind::ServiceUpdate,
        }
    }

    /// The revision left registered but unused when the service update failed.
    pub fn orphaned_revision(&self) -> Option<&str> {
        match self {
            DeployError::UpdateService {
                task_definition, ..
            } => Some(task_definition),
            _ => None,
        }
    }
}
