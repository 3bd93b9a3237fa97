// ABOUTME: Deployment orchestration using the type state pattern.
// ABOUTME: Exports state types, the Deployment struct and the one-shot runner.

mod deployment;
mod error;
mod mutate;
mod outcome;
mod run;
mod state;
mod transitions;

pub use deployment::Deployment;
pub use error::{DeployError, DeployErrorKind};
pub use mutate::{AWSLOGS_STREAM_PREFIX, build_registration};
pub use outcome::DeploymentResult;
pub use run::execute;
pub use state::{
    ConfigResolved, DefinitionFetched, DefinitionMutated, ImageResolved, Registered,
    ServiceUpdated,
};
