// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Release versions, image names, ECR repositories and control-plane ids.

mod id;
mod image_name;
mod version;

pub use id::{ClusterName, EcsServiceName, Id, TaskDefinitionArn, TaskDefinitionFamily};
pub use image_name::{EcrRepository, ImageName, ImageUri, ParseImageNameError};
pub use version::{ReleaseVersion, ReleaseVersionError};
