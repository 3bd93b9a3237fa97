// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup, config builders and an in-memory control plane.

use std::collections::HashMap;
use std::sync::Once;

use ecsdeploy::config::DeploymentConfig;

// Each test binary only uses some of these helpers, so allow dead_code.
#[allow(dead_code)]
pub mod fake_aws;
#[allow(dead_code)]
pub mod fixtures;

pub const ECR_IMAGE: &str = "123456789012.dkr.ecr.us-east-1.amazonaws.com/app";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("ecsdeploy=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Build a config the way the environment would, from key/value pairs.
#[allow(dead_code)]
pub fn config_from(vars: &[(&str, &str)]) -> DeploymentConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DeploymentConfig::from_lookup(|name| vars.get(name).cloned()).unwrap()
}

/// A complete config deploying `image`, optionally pinned by digest.
#[allow(dead_code)]
pub fn test_config(image: &str, use_image_digest: bool) -> DeploymentConfig {
    config_from(&[
        ("ECS_CLUSTER", "prod"),
        ("ECS_SERVICE", "web"),
        ("ECS_TASKDEF", "web"),
        ("IMAGE_NAME", image),
        (
            "ECR_USE_IMAGE_DIGEST",
            if use_image_digest { "true" } else { "false" },
        ),
    ])
}
