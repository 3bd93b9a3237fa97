// ABOUTME: awslogs stream prefix style selection.
// ABOUTME: Either the bare release version or <container>/<version>/.

use crate::types::ReleaseVersion;
use std::fmt;
use std::str::FromStr;

/// How the `awslogs-stream-prefix` option of the deployed container is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamPrefixStyle {
    /// `<version>`
    #[default]
    Version,
    /// `<container name>/<version>/`
    Container,
}

impl StreamPrefixStyle {
    /// Render the prefix for a container. A container without a name falls
    /// back to the bare version.
    pub fn render(self, container_name: Option<&str>, version: &ReleaseVersion) -> String {
        match (self, container_name) {
            (StreamPrefixStyle::Container, Some(name)) if !name.is_empty() => {
                format!("{name}/{version}/")
            }
            _ => version.to_string(),
        }
    }
}

impl FromStr for StreamPrefixStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "version" => Ok(StreamPrefixStyle::Version),
            "container" => Ok(StreamPrefixStyle::Container),
            _ => Err(format!("unknown awslogs stream prefix style: {s}")),
        }
    }
}

impl fmt::Display for StreamPrefixStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamPrefixStyle::Version => write!(f, "version"),
            StreamPrefixStyle::Container => write!(f, "container"),
        }
    }
}
