// ABOUTME: Generic deployment struct parameterized by state.
// ABOUTME: State types carry their own data for compile-time guarantees.

use crate::aws::{DeploymentStatus, RegistrationRequest, TaskDefinitionSnapshot};
use crate::config::DeploymentConfig;
use crate::diagnostics::Diagnostics;
use crate::types::{ImageUri, ReleaseVersion, TaskDefinitionArn};

use super::state::{
    ConfigResolved, DefinitionFetched, DefinitionMutated, ImageResolved, Registered,
    ServiceUpdated,
};

/// A deployment in progress, parameterized by its current state.
///
/// The state type parameter `S` carries what earlier steps produced, so a
/// registration request cannot exist before the image is resolved and the
/// service cannot be updated before a revision is registered.
#[derive(Debug)]
pub struct Deployment<S> {
    pub(crate) config: DeploymentConfig,
    pub(crate) version: ReleaseVersion,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) state: S,
}

impl Deployment<ConfigResolved> {
    /// Start a deployment of `version`.
    pub fn new(config: DeploymentConfig, version: ReleaseVersion) -> Self {
        Deployment {
            config,
            version,
            diagnostics: Diagnostics::default(),
            state: ConfigResolved,
        }
    }
}

impl<S> Deployment<S> {
    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl Deployment<ImageResolved> {
    pub fn image(&self) -> &ImageUri {
        &self.state.image
    }
}

impl Deployment<DefinitionFetched> {
    pub fn image(&self) -> &ImageUri {
        &self.state.image
    }

    pub fn snapshot(&self) -> &TaskDefinitionSnapshot {
        &self.state.snapshot
    }
}

impl Deployment<DefinitionMutated> {
    pub fn image(&self) -> &ImageUri {
        &self.state.image
    }

    /// The request that `register()` will submit.
    pub fn request(&self) -> &RegistrationRequest {
        &self.state.request
    }
}

impl Deployment<Registered> {
    pub fn task_definition(&self) -> &TaskDefinitionArn {
        &self.state.task_definition
    }
}

impl Deployment<ServiceUpdated> {
    pub fn task_definition(&self) -> &TaskDefinitionArn {
        &self.state.task_definition
    }

    pub fn deployments(&self) -> &[DeploymentStatus] {
        &self.state.deployments
    }
}
