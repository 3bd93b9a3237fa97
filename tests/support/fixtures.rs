// ABOUTME: Task definition fixtures built with the ECS SDK builders.
// ABOUTME: A realistic Fargate definition with roles, volumes, constraints and tags.

use aws_sdk_ecs::types::{
    Compatibility, ContainerDefinition, LogConfiguration, LogDriver, NetworkMode, Tag,
    TaskDefinition, TaskDefinitionPlacementConstraint, TaskDefinitionPlacementConstraintType,
    Volume,
};
use ecsdeploy::aws::TaskDefinitionSnapshot;

pub const CURRENT_ARN: &str = "arn:aws:ecs:us-east-1:123456789012:task-definition/web:7";

/// awslogs configuration with the given extra options.
pub fn awslogs(options: &[(&str, &str)]) -> LogConfiguration {
    log_configuration(LogDriver::Awslogs, options)
}

pub fn log_configuration(driver: LogDriver, options: &[(&str, &str)]) -> LogConfiguration {
    let mut builder = LogConfiguration::builder().log_driver(driver);
    for (key, value) in options {
        builder = builder.options(*key, *value);
    }
    builder.build().expect("log driver is set")
}

pub fn container(name: &str, image: &str, log: Option<LogConfiguration>) -> ContainerDefinition {
    ContainerDefinition::builder()
        .name(name)
        .image(image)
        .essential(true)
        .memory_reservation(128)
        .set_log_configuration(log)
        .build()
}

/// The `web` container as currently deployed, logging to CloudWatch.
pub fn web_container() -> ContainerDefinition {
    container(
        "web",
        "123456789012.dkr.ecr.us-east-1.amazonaws.com/app:v41",
        Some(awslogs(&[
            ("awslogs-group", "/ecs/web"),
            ("awslogs-region", "us-east-1"),
            ("awslogs-stream-prefix", "v41"),
        ])),
    )
}

pub fn sidecar_container() -> ContainerDefinition {
    container(
        "envoy",
        "public.ecr.aws/appmesh/aws-appmesh-envoy:v1.27",
        Some(awslogs(&[("awslogs-group", "/ecs/envoy")])),
    )
}

pub fn task_definition(containers: Vec<ContainerDefinition>) -> TaskDefinition {
    TaskDefinition::builder()
        .task_definition_arn(CURRENT_ARN)
        .family("web")
        .revision(7)
        .set_container_definitions(Some(containers))
        .cpu("256")
        .memory("512")
        .task_role_arn("arn:aws:iam::123456789012:role/web-task")
        .execution_role_arn("arn:aws:iam::123456789012:role/web-execution")
        .network_mode(NetworkMode::Awsvpc)
        .requires_compatibilities(Compatibility::Fargate)
        .volumes(Volume::builder().name("scratch").build())
        .placement_constraints(
            TaskDefinitionPlacementConstraint::builder()
                .r#type(TaskDefinitionPlacementConstraintType::MemberOf)
                .expression("attribute:ecs.availability-zone in [us-east-1a, us-east-1b]")
                .build(),
        )
        .build()
}

pub fn tags() -> Vec<Tag> {
    vec![
        Tag::builder().key("team").value("payments").build(),
        Tag::builder().key("env").value("prod").build(),
    ]
}

pub fn snapshot_with(containers: Vec<ContainerDefinition>) -> TaskDefinitionSnapshot {
    TaskDefinitionSnapshot {
        task_definition: task_definition(containers),
        tags: tags(),
    }
}

/// Single awslogs container, the common case.
pub fn snapshot() -> TaskDefinitionSnapshot {
    snapshot_with(vec![web_container()])
}
