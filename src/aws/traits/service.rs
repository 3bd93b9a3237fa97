// ABOUTME: Service operations trait.
// ABOUTME: Point a service at a task definition revision and report its rollouts.

use super::shared_types::DeploymentStatus;
use crate::types::{ClusterName, EcsServiceName, TaskDefinitionArn};
use async_trait::async_trait;

/// Service updates.
#[async_trait]
pub trait ServiceOps: Send + Sync {
    /// Update `service` in `cluster` to run `task_definition`.
    ///
    /// Returns the service's deployments as reported right after the call.
    /// The rollout itself continues asynchronously in the control plane.
    async fn update_service(
        &self,
        cluster: &ClusterName,
        service: &EcsServiceName,
        task_definition: &TaskDefinitionArn,
    ) -> Result<Vec<DeploymentStatus>, ServiceError>;
}

/// Errors from service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("ECS rejected the request: {0}")]
    Api(String),
}
