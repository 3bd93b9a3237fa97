// ABOUTME: Turns a fetched task definition into a registration request.
// ABOUTME: Only the first container's image and awslogs stream prefix change.

use std::collections::HashMap;

use aws_sdk_ecs::types::{ContainerDefinition, LogDriver};
use nonempty::NonEmpty;
use snafu::OptionExt;

use crate::aws::{RegistrationRequest, TaskDefinitionSnapshot};
use crate::config::StreamPrefixStyle;
use crate::diagnostics::{Diagnostics, Warning};
use crate::types::{ImageUri, ReleaseVersion, TaskDefinitionFamily};

use super::error::{DeployError, MissingFamilySnafu, NoContainersSnafu};

/// Log option rewritten on awslogs containers.
pub const AWSLOGS_STREAM_PREFIX: &str = "awslogs-stream-prefix";

/// Build the request that registers `image` as a new revision of the
/// snapshot's family.
///
/// The container at index 0 is the deployable one. Any other containers,
/// and every other register-able field of the definition, are carried over
/// unchanged.
pub fn build_registration(
    snapshot: TaskDefinitionSnapshot,
    requested: &TaskDefinitionFamily,
    image: &ImageUri,
    version: &ReleaseVersion,
    style: StreamPrefixStyle,
    diagnostics: &mut Diagnostics,
) -> Result<RegistrationRequest, DeployError> {
    let TaskDefinitionSnapshot {
        task_definition: definition,
        tags,
    } = snapshot;

    let family = definition.family.context(MissingFamilySnafu {
        task_definition: requested.as_str(),
    })?;

    let mut containers = NonEmpty::from_vec(definition.container_definitions.unwrap_or_default())
        .context(NoContainersSnafu {
            family: family.as_str(),
        })?;

    if containers.len() > 1 {
        diagnostics.warn(Warning::extra_containers(containers.len()));
    }

    update_container(&mut containers.head, image, version, style, diagnostics);

    Ok(RegistrationRequest {
        family,
        container_definitions: containers,
        cpu: definition.cpu,
        memory: definition.memory,
        task_role_arn: definition.task_role_arn,
        execution_role_arn: definition.execution_role_arn,
        network_mode: definition.network_mode,
        ipc_mode: definition.ipc_mode,
        pid_mode: definition.pid_mode,
        placement_constraints: definition.placement_constraints,
        proxy_configuration: definition.proxy_configuration,
        requires_compatibilities: definition.requires_compatibilities,
        volumes: definition.volumes,
        runtime_platform: definition.runtime_platform,
        ephemeral_storage: definition.ephemeral_storage,
        inference_accelerators: definition.inference_accelerators,
        enable_fault_injection: definition.enable_fault_injection,
        tags,
    })
}

fn update_container(
    container: &mut ContainerDefinition,
    image: &ImageUri,
    version: &ReleaseVersion,
    style: StreamPrefixStyle,
    diagnostics: &mut Diagnostics,
) {
    container.image = Some(image.to_string());

    let name = container.name.as_deref().unwrap_or("<unnamed>");
    match container.log_configuration.as_mut() {
        Some(log) if log.log_driver == LogDriver::Awslogs => {
            let prefix = style.render(container.name.as_deref(), version);
            log.options
                .get_or_insert_with(HashMap::new)
                .insert(AWSLOGS_STREAM_PREFIX.to_string(), prefix);
        }
        Some(log) => diagnostics.warn(Warning::log_driver_skipped(name, log.log_driver.as_str())),
        None => diagnostics.warn(Warning::no_log_configuration(name)),
    }
}
