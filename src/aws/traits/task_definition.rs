// ABOUTME: Task definition operations trait.
// ABOUTME: Describe the current definition of a family and register new revisions.

use super::shared_types::{RegistrationRequest, TaskDefinitionSnapshot};
use crate::types::{TaskDefinitionArn, TaskDefinitionFamily};
use async_trait::async_trait;

/// Task definition reads and writes.
#[async_trait]
pub trait TaskDefinitionOps: Send + Sync {
    /// Fetch the current definition and tags for a family.
    async fn describe_task_definition(
        &self,
        family: &TaskDefinitionFamily,
    ) -> Result<TaskDefinitionSnapshot, TaskDefinitionError>;

    /// Register a new revision, returning its ARN.
    async fn register_task_definition(
        &self,
        request: RegistrationRequest,
    ) -> Result<TaskDefinitionArn, TaskDefinitionError>;
}

/// Errors from task definition operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskDefinitionError {
    #[error("ECS rejected the request: {0}")]
    Api(String),

    #[error("ECS response is missing {0}")]
    IncompleteResponse(&'static str),
}
