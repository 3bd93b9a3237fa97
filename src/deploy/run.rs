// ABOUTME: Runs a deployment through every state in order.
// ABOUTME: The first failing step ends the run; nothing is retried.

use crate::aws::ControlPlane;
use crate::config::DeploymentConfig;
use crate::types::ReleaseVersion;

use super::error::DeployError;
use super::outcome::DeploymentResult;
use super::{ConfigResolved, Deployment};

/// Deploy `version` using `control_plane` for every remote call.
///
/// ```text
/// ConfigResolved -> ImageResolved -> DefinitionFetched -> DefinitionMutated
///                -> Registered -> ServiceUpdated -> DeploymentResult
/// ```
pub async fn execute<C: ControlPlane>(
    config: DeploymentConfig,
    version: ReleaseVersion,
    control_plane: &C,
) -> Result<DeploymentResult, DeployError> {
    tracing::info!(
        version = %version,
        cluster = %config.cluster,
        service = %config.service,
        family = %config.task_definition,
        "starting deployment"
    );

    let deployment: Deployment<ConfigResolved> = Deployment::new(config, version);
    let deployment = deployment.resolve_image(control_plane).await?;
    let deployment = deployment.fetch_definition(control_plane).await?;
    let deployment = deployment.mutate()?;
    let deployment = deployment.register(control_plane).await?;
    let deployment = deployment.update_service(control_plane).await?;

    Ok(deployment.finish())
}
