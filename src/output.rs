// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use std::time::Instant;

use crate::deploy::DeploymentResult;
use crate::error::Result;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Only the new task definition ARN
    Quiet,
    /// The deployment result as one JSON document
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print the outcome of a deployment.
    pub fn result(&self, result: &DeploymentResult) -> Result<()> {
        print!("{}", self.render(result)?);
        Ok(())
    }

    /// Render the outcome of a deployment as it would be printed.
    pub fn render(&self, result: &DeploymentResult) -> Result<String> {
        match self.mode {
            OutputMode::Normal => {
                let mut out = format!("  → Image: {}\n", result.image);
                out.push_str(&format!("  → Task definition: {}\n", result.task_definition));
                for d in &result.deployments {
                    out.push_str(&format!(
                        "  → Deployment {} [{}]: {}/{} running, {} pending\n",
                        d.id.as_deref().unwrap_or("-"),
                        d.status.as_deref().unwrap_or("UNKNOWN"),
                        d.running_count,
                        d.desired_count,
                        d.pending_count,
                    ));
                }
                for warning in &result.warnings {
                    out.push_str(&format!("  ! {warning}\n"));
                }
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    out.push_str(&format!("  ✓ Rollout requested ({:.1}s)\n", elapsed));
                } else {
                    out.push_str("  ✓ Rollout requested\n");
                }
                Ok(out)
            }
            OutputMode::Quiet => Ok(format!("{}\n", result.task_definition)),
            OutputMode::Json => Ok(format!("{}\n", serde_json::to_string(result)?)),
        }
    }
}
