// ABOUTME: The result handed back to whoever triggered the deployment.
// ABOUTME: Serializes with the TaskDefinition/Deployment keys Lambda callers expect.

use serde::Serialize;

use crate::aws::DeploymentStatus;
use crate::types::{ImageUri, TaskDefinitionArn};

/// What the control plane acknowledged.
///
/// `deployments` is a snapshot taken right after the service update; the
/// rollout is still in progress when this is returned.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentResult {
    /// ARN of the newly registered revision.
    #[serde(rename = "TaskDefinition")]
    pub task_definition: TaskDefinitionArn,

    #[serde(rename = "Image")]
    pub image: ImageUri,

    #[serde(rename = "Deployment")]
    pub deployments: Vec<DeploymentStatus>,

    #[serde(rename = "Warnings", skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl DeploymentResult {
    /// The deployment ECS marks as `PRIMARY`, i.e. the one rolling out the
    /// new revision.
    pub fn primary(&self) -> Option<&DeploymentStatus> {
        self.deployments
            .iter()
            .find(|d| d.status.as_deref() == Some("PRIMARY"))
    }
}
