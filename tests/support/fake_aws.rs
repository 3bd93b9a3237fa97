// ABOUTME: In-memory control plane implementing the registry, task definition and service traits.
// ABOUTME: Records every call so tests can assert ordering, arguments and absence of calls.

use async_trait::async_trait;
use ecsdeploy::aws::{
    DeploymentStatus, ImageDetail, RegistrationRequest, RegistryError, RegistryOps, ServiceError,
    ServiceOps, TaskDefinitionError, TaskDefinitionOps, TaskDefinitionSnapshot,
};
use ecsdeploy::types::{
    ClusterName, EcrRepository, EcsServiceName, ReleaseVersion, TaskDefinitionArn,
    TaskDefinitionFamily,
};
use parking_lot::Mutex;

use super::fixtures;

/// A recorded control-plane call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    DescribeImage {
        registry_id: String,
        repository: String,
        tag: String,
    },
    DescribeTaskDefinition(String),
    RegisterTaskDefinition(String),
    UpdateService {
        cluster: String,
        service: String,
        task_definition: String,
    },
}

/// Which call should fail, and how.
#[derive(Debug, Clone, Default)]
pub struct Failures {
    pub describe_image: Option<RegistryFailure>,
    pub describe_task_definition: bool,
    pub register: bool,
    pub update_service: Option<ServiceFailure>,
}

#[derive(Debug, Clone, Copy)]
pub enum RegistryFailure {
    NotFound,
    AccessDenied,
}

#[derive(Debug, Clone, Copy)]
pub enum ServiceFailure {
    NotFound,
    Conflict,
}

pub struct FakeAws {
    pub images: Vec<ImageDetail>,
    pub snapshot: TaskDefinitionSnapshot,
    pub deployments: Vec<DeploymentStatus>,
    pub failures: Failures,
    calls: Mutex<Vec<Call>>,
    registered: Mutex<Vec<RegistrationRequest>>,
}

impl FakeAws {
    /// A control plane holding `fixtures::snapshot()` and one image tagged v42.
    pub fn new() -> Self {
        Self {
            images: vec![ImageDetail {
                digest: Some("sha256:abc123".to_string()),
                tags: vec!["v42".to_string()],
            }],
            snapshot: fixtures::snapshot(),
            deployments: vec![
                DeploymentStatus {
                    id: Some("ecs-svc/2".to_string()),
                    status: Some("PRIMARY".to_string()),
                    desired_count: 2,
                    rollout_state: Some("IN_PROGRESS".to_string()),
                    ..Default::default()
                },
                DeploymentStatus {
                    id: Some("ecs-svc/1".to_string()),
                    status: Some("ACTIVE".to_string()),
                    task_definition: Some(fixtures::CURRENT_ARN.to_string()),
                    desired_count: 2,
                    running_count: 2,
                    rollout_state: Some("COMPLETED".to_string()),
                    ..Default::default()
                },
            ],
            failures: Failures::default(),
            calls: Mutex::new(Vec::new()),
            registered: Mutex::new(Vec::new()),
        }
    }

    pub fn with_images(mut self, images: Vec<ImageDetail>) -> Self {
        self.images = images;
        self
    }

    pub fn with_snapshot(mut self, snapshot: TaskDefinitionSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn with_failures(mut self, failures: Failures) -> Self {
        self.failures = failures;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn registered(&self) -> Vec<RegistrationRequest> {
        self.registered.lock().clone()
    }

    pub fn registry_lookups(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::DescribeImage { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl RegistryOps for FakeAws {
    async fn describe_image(
        &self,
        repository: &EcrRepository,
        tag: &ReleaseVersion,
    ) -> Result<Vec<ImageDetail>, RegistryError> {
        self.record(Call::DescribeImage {
            registry_id: repository.registry_id().to_string(),
            repository: repository.name().to_string(),
            tag: tag.to_string(),
        });

        match self.failures.describe_image {
            Some(RegistryFailure::NotFound) => {
                Err(RegistryError::NotFound(format!("{repository}:{tag}")))
            }
            Some(RegistryFailure::AccessDenied) => Err(RegistryError::Api(
                "AccessDeniedException: not authorized to perform ecr:DescribeImages".to_string(),
            )),
            None => Ok(self
                .images
                .iter()
                .filter(|image| image.tags.iter().any(|t| t == tag.as_str()))
                .cloned()
                .collect()),
        }
    }
}

#[async_trait]
impl TaskDefinitionOps for FakeAws {
    async fn describe_task_definition(
        &self,
        family: &TaskDefinitionFamily,
    ) -> Result<TaskDefinitionSnapshot, TaskDefinitionError> {
        self.record(Call::DescribeTaskDefinition(family.to_string()));

        if self.failures.describe_task_definition {
            return Err(TaskDefinitionError::Api(
                "ClientException: Unable to describe task definition.".to_string(),
            ));
        }
        Ok(self.snapshot.clone())
    }

    async fn register_task_definition(
        &self,
        request: RegistrationRequest,
    ) -> Result<TaskDefinitionArn, TaskDefinitionError> {
        self.record(Call::RegisterTaskDefinition(request.family.clone()));

        if self.failures.register {
            return Err(TaskDefinitionError::Api(
                "ClientException: Invalid 'cpu' setting for task.".to_string(),
            ));
        }

        let mut registered = self.registered.lock();
        let revision = self.snapshot.task_definition.revision as usize + registered.len() + 1;
        let arn = format!(
            "arn:aws:ecs:us-east-1:123456789012:task-definition/{}:{revision}",
            request.family
        );
        registered.push(request);
        Ok(TaskDefinitionArn::new(arn))
    }
}

#[async_trait]
impl ServiceOps for FakeAws {
    async fn update_service(
        &self,
        cluster: &ClusterName,
        service: &EcsServiceName,
        task_definition: &TaskDefinitionArn,
    ) -> Result<Vec<DeploymentStatus>, ServiceError> {
        self.record(Call::UpdateService {
            cluster: cluster.to_string(),
            service: service.to_string(),
            task_definition: task_definition.to_string(),
        });

        match self.failures.update_service {
            Some(ServiceFailure::NotFound) => {
                Err(ServiceError::NotFound(format!("{cluster}/{service}")))
            }
            Some(ServiceFailure::Conflict) => Err(ServiceError::Api(
                "InvalidParameterException: a deployment is already in progress".to_string(),
            )),
            None => {
                let mut deployments = self.deployments.clone();
                if let Some(primary) = deployments.first_mut() {
                    primary.task_definition = Some(task_definition.to_string());
                }
                Ok(deployments)
            }
        }
    }
}
