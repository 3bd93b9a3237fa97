// ABOUTME: Diagnostics accumulator for non-fatal warnings during deployment.
// ABOUTME: Collects conditions that shouldn't fail a deployment but should be reported.

/// Collects non-fatal warnings during one deployment.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal warning collected during deployment.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// The deployed container has no log configuration to update.
    pub fn no_log_configuration(container: &str) -> Self {
        Self {
            kind: WarningKind::NoLogConfiguration,
            message: format!(
                "container {container} has no log configuration; stream prefix left unset"
            ),
        }
    }

    /// The deployed container logs through a driver other than awslogs.
    pub fn log_driver_skipped(container: &str, driver: &str) -> Self {
        Self {
            kind: WarningKind::LogDriverSkipped,
            message: format!(
                "container {container} uses log driver {driver}; stream prefix left unchanged"
            ),
        }
    }

    /// Only the first of several containers received the new image.
    pub fn extra_containers(count: usize) -> Self {
        Self {
            kind: WarningKind::ExtraContainers,
            message: format!(
                "task definition has {count} containers; only the first was updated"
            ),
        }
    }

    /// The registry returned no image for the tag but digest pinning was off.
    pub fn empty_registry_lookup(image: &str) -> Self {
        Self {
            kind: WarningKind::EmptyRegistryLookup,
            message: format!("registry returned no image for {image}; deploying by tag"),
        }
    }
}

/// Category of a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The deployed container has no log configuration.
    NoLogConfiguration,
    /// The deployed container does not use the awslogs driver.
    LogDriverSkipped,
    /// The task definition has more than one container.
    ExtraContainers,
    /// The registry lookup came back empty.
    EmptyRegistryLookup,
}
