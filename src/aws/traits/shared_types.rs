// ABOUTME: Shared types used across control-plane trait definitions.
// ABOUTME: ImageDetail, TaskDefinitionSnapshot, RegistrationRequest, DeploymentStatus.

use aws_sdk_ecs::types::{
    Compatibility, ContainerDefinition, EphemeralStorage, InferenceAccelerator, IpcMode,
    NetworkMode, PidMode, ProxyConfiguration, RuntimePlatform, Tag, TaskDefinition,
    TaskDefinitionPlacementConstraint, Volume,
};
use chrono::{DateTime, Utc};
use nonempty::NonEmpty;
use serde::Serialize;

/// One image returned by a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageDetail {
    /// Content digest, e.g. `sha256:...`.
    pub digest: Option<String>,
    /// Tags pointing at this image.
    pub tags: Vec<String>,
}

/// The current definition of a task family together with its resource tags.
///
/// Treated as pass-through data: only the first container is ever changed.
#[derive(Debug, Clone)]
pub struct TaskDefinitionSnapshot {
    pub task_definition: TaskDefinition,
    pub tags: Vec<Tag>,
}

/// Input for registering a new revision of a task family.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRequest {
    pub family: String,
    /// Index 0 is the deployable container.
    pub container_definitions: NonEmpty<ContainerDefinition>,
    pub cpu: Option<String>,
    pub memory: Option<String>,
    pub task_role_arn: Option<String>,
    pub execution_role_arn: Option<String>,
    pub network_mode: Option<NetworkMode>,
    pub ipc_mode: Option<IpcMode>,
    pub pid_mode: Option<PidMode>,
    pub placement_constraints: Option<Vec<TaskDefinitionPlacementConstraint>>,
    pub proxy_configuration: Option<ProxyConfiguration>,
    pub requires_compatibilities: Option<Vec<Compatibility>>,
    pub volumes: Option<Vec<Volume>>,
    pub runtime_platform: Option<RuntimePlatform>,
    pub ephemeral_storage: Option<EphemeralStorage>,
    pub inference_accelerators: Option<Vec<InferenceAccelerator>>,
    pub enable_fault_injection: Option<bool>,
    pub tags: Vec<Tag>,
}

impl RegistrationRequest {
    /// The container whose image is being rolled out.
    pub fn primary_container(&self) -> &ContainerDefinition {
        &self.container_definitions.head
    }
}

/// A point-in-time view of one rollout reported by UpdateService.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStatus {
    pub id: Option<String>,
    /// `PRIMARY`, `ACTIVE` or `INACTIVE`.
    pub status: Option<String>,
    pub task_definition: Option<String>,
    pub desired_count: i32,
    pub pending_count: i32,
    pub running_count: i32,
    pub rollout_state: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
