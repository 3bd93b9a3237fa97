// ABOUTME: Phantom-typed names for the ECS resources a deployment touches.
// ABOUTME: Keeps cluster, service, family and task definition ARN strings apart.

use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

pub enum ClusterMarker {}
pub enum ServiceMarker {}
pub enum FamilyMarker {}
pub enum TaskDefinitionArnMarker {}

/// An ECS resource name tagged with the kind of resource it names.
///
/// `update_service` takes a cluster, a service and a task definition ARN, all
/// plain strings on the wire; swapping two of them does not compile.
#[must_use]
pub struct Id<T> {
    value: String,
    _kind: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _kind: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Written by hand so the marker types need no trait impls.

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.as_str())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Result payloads carry ARNs as bare strings.
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

pub type ClusterName = Id<ClusterMarker>;
pub type EcsServiceName = Id<ServiceMarker>;
/// Family name, `family:revision`, or full ARN; anything DescribeTaskDefinition accepts.
pub type TaskDefinitionFamily = Id<FamilyMarker>;
pub type TaskDefinitionArn = Id<TaskDefinitionArnMarker>;
