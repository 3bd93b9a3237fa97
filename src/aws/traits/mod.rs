// ABOUTME: Composable capability traits for the registry and orchestration control planes.
// ABOUTME: Defines RegistryOps, TaskDefinitionOps, ServiceOps and the ControlPlane bundle.

mod registry;
mod service;
mod shared_types;
mod task_definition;

pub use registry::{RegistryError, RegistryOps};
pub use service::{ServiceError, ServiceOps};
pub use shared_types::*;
pub use task_definition::{TaskDefinitionError, TaskDefinitionOps};

/// Every capability a deployment needs.
///
/// Implemented automatically for any type providing all three.
pub trait ControlPlane: RegistryOps + TaskDefinitionOps + ServiceOps {}

impl<T> ControlPlane for T where T: RegistryOps + TaskDefinitionOps + ServiceOps {}
