// ABOUTME: Deployment configuration resolved from the process environment.
// ABOUTME: Validates every required variable before any AWS client is touched.

mod stream_prefix;

pub use stream_prefix::StreamPrefixStyle;

use crate::error::{Error, Result};
use crate::types::{ClusterName, EcsServiceName, ImageName, TaskDefinitionFamily};

pub const ENV_CLUSTER: &str = "ECS_CLUSTER";
pub const ENV_SERVICE: &str = "ECS_SERVICE";
pub const ENV_TASK_DEFINITION: &str = "ECS_TASKDEF";
pub const ENV_IMAGE: &str = "IMAGE_NAME";
pub const ENV_USE_IMAGE_DIGEST: &str = "ECR_USE_IMAGE_DIGEST";
pub const ENV_STREAM_PREFIX_STYLE: &str = "AWSLOGS_STREAM_PREFIX_STYLE";

/// Everything a deployment needs besides the version being released.
///
/// Immutable once resolved; the Lambda loop resolves it once per process and
/// shares it across invocations.
#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub cluster: ClusterName,
    pub service: EcsServiceName,
    pub task_definition: TaskDefinitionFamily,
    pub image: ImageName,
    pub use_image_digest: bool,
    pub stream_prefix: StreamPrefixStyle,
}

impl DeploymentConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve through an arbitrary variable lookup.
    ///
    /// Required variables are checked in a fixed order and the first missing
    /// one is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String> {
            match lookup(name) {
                None => Err(Error::MissingEnvVar(name.to_string())),
                Some(value) if value.is_empty() => {
                    Err(Error::InvalidConfig(format!("{name} is set but empty")))
                }
                Some(value) => Ok(value),
            }
        };

        let cluster = required(ENV_CLUSTER)?;
        let service = required(ENV_SERVICE)?;
        let task_definition = required(ENV_TASK_DEFINITION)?;
        let image = required(ENV_IMAGE)?;

        let image = ImageName::parse(&image)
            .map_err(|e| Error::InvalidConfig(format!("{ENV_IMAGE}: {e}")))?;

        let use_image_digest = lookup(ENV_USE_IMAGE_DIGEST).as_deref() == Some("true");

        let stream_prefix = match lookup(ENV_STREAM_PREFIX_STYLE) {
            Some(value) => value
                .parse()
                .map_err(|e| Error::InvalidConfig(format!("{ENV_STREAM_PREFIX_STYLE}: {e}")))?,
            None => StreamPrefixStyle::default(),
        };

        Ok(Self {
            cluster: ClusterName::new(cluster),
            service: EcsServiceName::new(service),
            task_definition: TaskDefinitionFamily::new(task_definition),
            image,
            use_image_digest,
            stream_prefix,
        })
    }
}
