// ABOUTME: SDK-backed implementation of the control-plane traits.
// ABOUTME: Wraps one ECR and one ECS client built from a shared SdkConfig.

use super::traits::{
    DeploymentStatus, ImageDetail, RegistrationRequest, RegistryError, RegistryOps, ServiceError,
    ServiceOps, TaskDefinitionError, TaskDefinitionOps, TaskDefinitionSnapshot,
};
use crate::types::{
    ClusterName, EcrRepository, EcsServiceName, ReleaseVersion, TaskDefinitionArn,
    TaskDefinitionFamily,
};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ecr::types::ImageIdentifier;
use aws_sdk_ecs::types::{Deployment, TaskDefinitionField};
use chrono::{DateTime, Utc};
use tracing::debug;

/// ECR and ECS clients, built once per process and shared read-only across
/// invocations.
#[derive(Debug, Clone)]
pub struct AwsClients {
    ecr: aws_sdk_ecr::Client,
    ecs: aws_sdk_ecs::Client,
}

impl AwsClients {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            ecr: aws_sdk_ecr::Client::new(sdk_config),
            ecs: aws_sdk_ecs::Client::new(sdk_config),
        }
    }

    /// Build clients from the default credential and region chain.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(&sdk_config)
    }
}

#[async_trait]
impl RegistryOps for AwsClients {
    async fn describe_image(
        &self,
        repository: &EcrRepository,
        tag: &ReleaseVersion,
    ) -> Result<Vec<ImageDetail>, RegistryError> {
        debug!(repository = %repository, tag = %tag, "describing ECR image");

        let output = self
            .ecr
            .describe_images()
            .registry_id(repository.registry_id())
            .repository_name(repository.name())
            .image_ids(ImageIdentifier::builder().image_tag(tag.as_str()).build())
            .send()
            .await
            .map_err(|err| {
                let not_found = err.as_service_error().is_some_and(|e| {
                    e.is_image_not_found_exception() || e.is_repository_not_found_exception()
                });
                if not_found {
                    RegistryError::NotFound(format!("{repository}:{tag}"))
                } else {
                    RegistryError::Api(aws_sdk_ecr::error::DisplayErrorContext(&err).to_string())
                }
            })?;

        Ok(output
            .image_details()
            .iter()
            .map(|detail| ImageDetail {
                digest: detail.image_digest().map(str::to_string),
                tags: detail.image_tags().to_vec(),
            })
            .collect())
    }
}

#[async_trait]
impl TaskDefinitionOps for AwsClients {
    async fn describe_task_definition(
        &self,
        family: &TaskDefinitionFamily,
    ) -> Result<TaskDefinitionSnapshot, TaskDefinitionError> {
        debug!(family = %family, "describing task definition");

        // Tags are only returned when asked for.
        let output = self
            .ecs
            .describe_task_definition()
            .task_definition(family.as_str())
            .include(TaskDefinitionField::Tags)
            .send()
            .await
            .map_err(|err| {
                TaskDefinitionError::Api(aws_sdk_ecs::error::DisplayErrorContext(&err).to_string())
            })?;

        let task_definition = output
            .task_definition
            .ok_or(TaskDefinitionError::IncompleteResponse("taskDefinition"))?;

        Ok(TaskDefinitionSnapshot {
            task_definition,
            tags: output.tags.unwrap_or_default(),
        })
    }

    async fn register_task_definition(
        &self,
        request: RegistrationRequest,
    ) -> Result<TaskDefinitionArn, TaskDefinitionError> {
        debug!(family = %request.family, "registering task definition");

        let tags = (!request.tags.is_empty()).then_some(request.tags);

        let output = self
            .ecs
            .register_task_definition()
            .family(request.family)
            .set_container_definitions(Some(request.container_definitions.into()))
            .set_cpu(request.cpu)
            .set_memory(request.memory)
            .set_task_role_arn(request.task_role_arn)
            .set_execution_role_arn(request.execution_role_arn)
            .set_network_mode(request.network_mode)
            .set_ipc_mode(request.ipc_mode)
            .set_pid_mode(request.pid_mode)
            .set_placement_constraints(request.placement_constraints)
            .set_proxy_configuration(request.proxy_configuration)
            .set_requires_compatibilities(request.requires_compatibilities)
            .set_volumes(request.volumes)
            .set_runtime_platform(request.runtime_platform)
            .set_ephemeral_storage(request.ephemeral_storage)
            .set_inference_accelerators(request.inference_accelerators)
            .set_enable_fault_injection(request.enable_fault_injection)
            .set_tags(tags)
            .send()
            .await
            .map_err(|err| {
                TaskDefinitionError::Api(aws_sdk_ecs::error::DisplayErrorContext(&err).to_string())
            })?;

        output
            .task_definition
            .and_then(|td| td.task_definition_arn)
            .map(TaskDefinitionArn::new)
            .ok_or(TaskDefinitionError::IncompleteResponse(
                "taskDefinition.taskDefinitionArn",
            ))
    }
}

#[async_trait]
impl ServiceOps for AwsClients {
    async fn update_service(
        &self,
        cluster: &ClusterName,
        service: &EcsServiceName,
        task_definition: &TaskDefinitionArn,
    ) -> Result<Vec<DeploymentStatus>, ServiceError> {
        debug!(
            cluster = %cluster,
            service = %service,
            task_definition = %task_definition,
            "updating service"
        );

        let output = self
            .ecs
            .update_service()
            .cluster(cluster.as_str())
            .service(service.as_str())
            .task_definition(task_definition.as_str())
            .send()
            .await
            .map_err(|err| {
                let not_found = err.as_service_error().is_some_and(|e| {
                    e.is_service_not_found_exception() || e.is_cluster_not_found_exception()
                });
                if not_found {
                    ServiceError::NotFound(format!("{cluster}/{service}"))
                } else {
                    ServiceError::Api(aws_sdk_ecs::error::DisplayErrorContext(&err).to_string())
                }
            })?;

        Ok(output
            .service
            .and_then(|s| s.deployments)
            .unwrap_or_default()
            .iter()
            .map(deployment_status)
            .collect())
    }
}

fn deployment_status(deployment: &Deployment) -> DeploymentStatus {
    DeploymentStatus {
        id: deployment.id.clone(),
        status: deployment.status.clone(),
        task_definition: deployment.task_definition.clone(),
        desired_count: deployment.desired_count,
        pending_count: deployment.pending_count,
        running_count: deployment.running_count,
        rollout_state: deployment
            .rollout_state
            .as_ref()
            .map(|state| state.as_str().to_string()),
        created_at: deployment
            .created_at
            .as_ref()
            .and_then(|t| DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos())),
    }
}
