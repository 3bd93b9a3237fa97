// ABOUTME: Lambda event handling for deployment requests.
// ABOUTME: Deserializes {"version": ...}, deploys, and answers with the result.

use lambda_runtime::{LambdaEvent, service_fn};
use serde::{Deserialize, Serialize};

use crate::aws::{AwsClients, ControlPlane};
use crate::config::DeploymentConfig;
use crate::deploy::{self, DeploymentResult};
use crate::error::{Error, Result};
use crate::types::ReleaseVersion;

/// The invocation payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeployEvent {
    pub version: String,
}

/// Handle one deployment request.
///
/// The version is validated before any remote call is made.
pub async fn handle<C: ControlPlane>(
    config: &DeploymentConfig,
    control_plane: &C,
    event: DeployEvent,
) -> Result<DeploymentResult> {
    let version = ReleaseVersion::new(&event.version)?;
    let result = deploy::execute(config.clone(), version, control_plane).await?;
    Ok(result)
}

/// Serve events from the Lambda runtime API until the runtime shuts down.
///
/// `config` and `clients` are built once and shared by every invocation.
pub async fn run_lambda(config: DeploymentConfig, clients: AwsClients) -> Result<()> {
    let config = &config;
    let clients = &clients;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<DeployEvent>| async move {
            tracing::info!(request_id = %event.context.request_id, "received deployment event");
            handle(config, clients, event.payload).await.map_err(|e| {
                tracing::error!(error = %e, "deployment failed");
                lambda_runtime::Error::from(e)
            })
        },
    ))
    .await
    .map_err(|e| Error::Runtime(e.to_string()))
}
