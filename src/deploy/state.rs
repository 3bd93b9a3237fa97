// ABOUTME: Deployment state types for the type state pattern.
// ABOUTME: Each state carries the data produced by the step that reached it.

use crate::aws::{DeploymentStatus, RegistrationRequest, TaskDefinitionSnapshot};
use crate::types::{ImageUri, TaskDefinitionArn};

/// Initial state: configuration and version validated, nothing called yet.
/// Available actions: `resolve_image()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigResolved;

/// Image resolved: the final image URI is known.
/// Available actions: `fetch_definition()`
#[derive(Debug, Clone)]
pub struct ImageResolved {
    pub(crate) image: ImageUri,
}

/// Definition fetched: the family's current definition is in hand.
/// Available actions: `mutate()`
#[derive(Debug, Clone)]
pub struct DefinitionFetched {
    pub(crate) image: ImageUri,
    pub(crate) snapshot: TaskDefinitionSnapshot,
}

/// Definition mutated: a registration request is ready, nothing submitted.
/// Available actions: `register()`
#[derive(Debug, Clone)]
pub struct DefinitionMutated {
    pub(crate) image: ImageUri,
    pub(crate) request: RegistrationRequest,
}

/// Registered: a new revision exists but no service runs it yet.
/// Available actions: `update_service()`
#[derive(Debug, Clone)]
pub struct Registered {
    pub(crate) image: ImageUri,
    pub(crate) task_definition: TaskDefinitionArn,
}

/// Service updated: the rollout has been requested.
/// Available actions: `finish()`
#[derive(Debug, Clone)]
pub struct ServiceUpdated {
    pub(crate) image: ImageUri,
    pub(crate) task_definition: TaskDefinitionArn,
    pub(crate) deployments: Vec<DeploymentStatus>,
}
