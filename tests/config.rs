// ABOUTME: Integration tests for deployment configuration resolution.
// ABOUTME: Tests required variables, the digest flag and the stream prefix style.

mod support;

use ecsdeploy::config::*;
use ecsdeploy::error::Error;
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

const COMPLETE: [(&str, &str); 4] = [
    ("ECS_CLUSTER", "prod"),
    ("ECS_SERVICE", "web"),
    ("ECS_TASKDEF", "web"),
    ("IMAGE_NAME", "123456789012.dkr.ecr.us-east-1.amazonaws.com/app"),
];

fn without(name: &str) -> Vec<(&'static str, &'static str)> {
    COMPLETE.iter().copied().filter(|(k, _)| *k != name).collect()
}

mod required {
    use super::*;

    #[test]
    fn complete_environment_resolves() {
        let config = DeploymentConfig::from_lookup(lookup(&COMPLETE)).unwrap();
        assert_eq!(config.cluster.as_str(), "prod");
        assert_eq!(config.service.as_str(), "web");
        assert_eq!(config.task_definition.as_str(), "web");
        assert_eq!(
            config.image.as_str(),
            "123456789012.dkr.ecr.us-east-1.amazonaws.com/app"
        );
        assert!(!config.use_image_digest);
        assert_eq!(config.stream_prefix, StreamPrefixStyle::Version);
    }

    #[test]
    fn each_missing_variable_is_named() {
        for name in [ENV_CLUSTER, ENV_SERVICE, ENV_TASK_DEFINITION, ENV_IMAGE] {
            let err = DeploymentConfig::from_lookup(lookup(&without(name))).unwrap_err();
            match err {
                Error::MissingEnvVar(missing) => assert_eq!(missing, name),
                other => panic!("expected MissingEnvVar({name}), got {other:?}"),
            }
        }
    }

    #[test]
    fn first_missing_variable_is_reported() {
        let err = DeploymentConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::MissingEnvVar(ref name) if name == "ECS_CLUSTER"));
        assert!(err.is_misconfiguration());
    }

    #[test]
    fn empty_value_is_invalid() {
        let mut vars = without(ENV_SERVICE);
        vars.push((ENV_SERVICE, ""));
        let err = DeploymentConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("ECS_SERVICE")));
    }

    #[test]
    fn tagged_image_name_is_invalid() {
        let mut vars = without(ENV_IMAGE);
        vars.push((ENV_IMAGE, "nginx:latest"));
        let err = DeploymentConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("IMAGE_NAME")));
    }
}

mod digest_flag {
    use super::*;

    fn with_flag(value: &str) -> DeploymentConfig {
        let mut vars = COMPLETE.to_vec();
        vars.push((ENV_USE_IMAGE_DIGEST, value));
        DeploymentConfig::from_lookup(lookup(&vars)).unwrap()
    }

    #[test]
    fn only_exact_true_enables_pinning() {
        assert!(with_flag("true").use_image_digest);
        for value in ["TRUE", "True", "1", "yes", "", "false"] {
            assert!(!with_flag(value).use_image_digest, "{value:?} must not pin");
        }
    }
}

mod stream_prefix {
    use super::*;

    #[test]
    fn container_style_is_selectable() {
        let mut vars = COMPLETE.to_vec();
        vars.push((ENV_STREAM_PREFIX_STYLE, "container"));
        let config = DeploymentConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.stream_prefix, StreamPrefixStyle::Container);
    }

    #[test]
    fn unknown_style_is_invalid() {
        let mut vars = COMPLETE.to_vec();
        vars.push((ENV_STREAM_PREFIX_STYLE, "hostname"));
        let err = DeploymentConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}

mod process_environment {
    use super::*;

    #[test]
    fn from_env_reads_process_variables() {
        temp_env::with_vars(
            [
                ("ECS_CLUSTER", Some("prod")),
                ("ECS_SERVICE", Some("web")),
                ("ECS_TASKDEF", Some("web:7")),
                ("IMAGE_NAME", Some("nginx")),
                ("ECR_USE_IMAGE_DIGEST", Some("true")),
                ("AWSLOGS_STREAM_PREFIX_STYLE", None),
            ],
            || {
                let config = DeploymentConfig::from_env().unwrap();
                assert_eq!(config.task_definition.as_str(), "web:7");
                assert_eq!(config.image.as_str(), "nginx");
                assert!(config.use_image_digest);
            },
        );
    }

    #[test]
    fn from_env_fails_without_cluster() {
        temp_env::with_vars(
            [
                ("ECS_CLUSTER", None),
                ("ECS_SERVICE", Some("web")),
                ("ECS_TASKDEF", Some("web")),
                ("IMAGE_NAME", Some("nginx")),
            ],
            || {
                let err = DeploymentConfig::from_env().unwrap_err();
                assert_eq!(
                    err.to_string(),
                    "missing required environment variable: ECS_CLUSTER"
                );
            },
        );
    }

    #[test]
    fn support_helper_matches_from_lookup() {
        let config = support::test_config("nginx", true);
        assert!(config.use_image_digest);
        assert_eq!(config.cluster.as_str(), "prod");
    }
}
