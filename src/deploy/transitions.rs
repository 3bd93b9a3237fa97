// ABOUTME: State transition methods for deployment orchestration.
// ABOUTME: Each method consumes self and returns the next state on success.

use snafu::{OptionExt, ResultExt};

use crate::aws::{RegistryOps, ServiceOps, TaskDefinitionOps};
use crate::diagnostics::Warning;
use crate::types::{EcrRepository, ImageUri};

use super::Deployment;
use super::error::{
    DeployError, DescribeTaskDefinitionSnafu, ImageLookupSnafu, ImageNotFoundSnafu,
    RegisterTaskDefinitionSnafu, UpdateServiceSnafu,
};
use super::mutate::build_registration;
use super::outcome::DeploymentResult;
use super::state::{
    ConfigResolved, DefinitionFetched, DefinitionMutated, ImageResolved, Registered,
    ServiceUpdated,
};

// =============================================================================
// Internal Helpers
// =============================================================================

impl<S> Deployment<S> {
    /// Split off the state so its data can be moved into the next one.
    fn into_parts(self) -> (Deployment<()>, S) {
        (
            Deployment {
                config: self.config,
                version: self.version,
                diagnostics: self.diagnostics,
                state: (),
            },
            self.state,
        )
    }
}

impl Deployment<()> {
    fn with_state<T>(self, state: T) -> Deployment<T> {
        Deployment {
            config: self.config,
            version: self.version,
            diagnostics: self.diagnostics,
            state,
        }
    }
}

// =============================================================================
// ConfigResolved -> ImageResolved
// =============================================================================

impl Deployment<ConfigResolved> {
    /// Decide the image URI to deploy.
    ///
    /// Images outside ECR deploy as `<image>:<version>` without any lookup.
    /// ECR images are looked up by tag first; with digest pinning enabled the
    /// result is `<image>@<digest>`, otherwise still `<image>:<version>`.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::ImageLookup` if the registry call fails and
    /// `DeployError::ImageNotFound` if pinning was requested but the lookup
    /// produced no digest.
    #[must_use = "deployment state must be used"]
    pub async fn resolve_image<R: RegistryOps>(
        self,
        registry: &R,
    ) -> Result<Deployment<ImageResolved>, DeployError> {
        let (mut deployment, ConfigResolved) = self.into_parts();

        let image = match deployment.config.image.ecr_repository() {
            Some(repository) => deployment.resolve_ecr_image(registry, &repository).await?,
            None => {
                tracing::debug!(
                    image = %deployment.config.image,
                    "image is not hosted on ECR, skipping registry lookup"
                );
                deployment.config.image.with_tag(&deployment.version)
            }
        };

        tracing::info!(image = %image, pinned = image.is_pinned(), "resolved image");
        Ok(deployment.with_state(ImageResolved { image }))
    }
}

impl Deployment<()> {
    async fn resolve_ecr_image<R: RegistryOps>(
        &mut self,
        registry: &R,
        repository: &EcrRepository,
    ) -> Result<ImageUri, DeployError> {
        let details = registry
            .describe_image(repository, &self.version)
            .await
            .context(ImageLookupSnafu {
                image: format!("{repository}:{}", self.version),
            })?;

        if !self.config.use_image_digest {
            if details.is_empty() {
                self.diagnostics.warn(Warning::empty_registry_lookup(&format!(
                    "{repository}:{}",
                    self.version
                )));
            }
            return Ok(self.config.image.with_tag(&self.version));
        }

        let digest = details
            .into_iter()
            .next()
            .and_then(|detail| detail.digest)
            .context(ImageNotFoundSnafu {
                repository: repository.to_string(),
                tag: self.version.as_str(),
            })?;

        Ok(self.config.image.with_digest(&digest))
    }
}

// =============================================================================
// ImageResolved -> DefinitionFetched
// =============================================================================

impl Deployment<ImageResolved> {
    /// Fetch the current task definition of the configured family.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::DescribeTaskDefinition` if ECS cannot describe it.
    #[must_use = "deployment state must be used"]
    pub async fn fetch_definition<T: TaskDefinitionOps>(
        self,
        ecs: &T,
    ) -> Result<Deployment<DefinitionFetched>, DeployError> {
        let (deployment, ImageResolved { image }) = self.into_parts();
        let family = &deployment.config.task_definition;

        let snapshot = ecs
            .describe_task_definition(family)
            .await
            .context(DescribeTaskDefinitionSnafu {
                family: family.as_str(),
            })?;

        tracing::info!(
            family = %family,
            arn = snapshot.task_definition.task_definition_arn.as_deref().unwrap_or_default(),
            "fetched task definition"
        );
        Ok(deployment.with_state(DefinitionFetched { image, snapshot }))
    }
}

// =============================================================================
// DefinitionFetched -> DefinitionMutated
// =============================================================================

impl Deployment<DefinitionFetched> {
    /// Point the first container at the resolved image and build the
    /// registration request. Nothing is submitted.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::NoContainers` or `DeployError::MissingFamily` if
    /// the fetched definition cannot be re-registered.
    #[must_use = "deployment state must be used"]
    pub fn mutate(self) -> Result<Deployment<DefinitionMutated>, DeployError> {
        let (mut deployment, DefinitionFetched { image, snapshot }) = self.into_parts();

        let request = build_registration(
            snapshot,
            &deployment.config.task_definition,
            &image,
            &deployment.version,
            deployment.config.stream_prefix,
            &mut deployment.diagnostics,
        )?;

        Ok(deployment.with_state(DefinitionMutated { image, request }))
    }
}

// =============================================================================
// DefinitionMutated -> Registered
// =============================================================================

impl Deployment<DefinitionMutated> {
    /// Register the mutated definition as a new revision.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::RegisterTaskDefinition` if ECS rejects it.
    #[must_use = "deployment state must be used"]
    pub async fn register<T: TaskDefinitionOps>(
        self,
        ecs: &T,
    ) -> Result<Deployment<Registered>, DeployError> {
        let (deployment, DefinitionMutated { image, request }) = self.into_parts();
        let family = request.family.clone();

        let task_definition = ecs
            .register_task_definition(request)
            .await
            .context(RegisterTaskDefinitionSnafu { family: &family })?;

        tracing::info!(family = %family, arn = %task_definition, "registered task definition");
        Ok(deployment.with_state(Registered {
            image,
            task_definition,
        }))
    }
}

// =============================================================================
// Registered -> ServiceUpdated
// =============================================================================

impl Deployment<Registered> {
    /// Point the configured service at the new revision.
    ///
    /// A failure here leaves the new revision registered; it is not
    /// deregistered.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::UpdateService`, which carries the orphaned ARN.
    #[must_use = "deployment state must be used"]
    pub async fn update_service<T: ServiceOps>(
        self,
        ecs: &T,
    ) -> Result<Deployment<ServiceUpdated>, DeployError> {
        let (
            deployment,
            Registered {
                image,
                task_definition,
            },
        ) = self.into_parts();
        let cluster = &deployment.config.cluster;
        let service = &deployment.config.service;

        let deployments = ecs
            .update_service(cluster, service, &task_definition)
            .await
            .context(UpdateServiceSnafu {
                cluster: cluster.as_str(),
                service: service.as_str(),
                task_definition: task_definition.as_str(),
            })?;

        tracing::info!(
            cluster = %cluster,
            service = %service,
            arn = %task_definition,
            deployments = deployments.len(),
            "service update requested"
        );
        Ok(deployment.with_state(ServiceUpdated {
            image,
            task_definition,
            deployments,
        }))
    }
}

// =============================================================================
// ServiceUpdated -> done
// =============================================================================

impl Deployment<ServiceUpdated> {
    /// Finish the deployment, returning what the control plane reported.
    pub fn finish(self) -> DeploymentResult {
        let (
            deployment,
            ServiceUpdated {
                image,
                task_definition,
                deployments,
            },
        ) = self.into_parts();

        DeploymentResult {
            task_definition,
            image,
            deployments,
            warnings: deployment
                .diagnostics
                .into_warnings()
                .into_iter()
                .map(|w| w.message)
                .collect(),
        }
    }
}
