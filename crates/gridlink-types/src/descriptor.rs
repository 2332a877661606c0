//! Reference descriptors
//!
//! A ResourceRef identifies which derived resource a consumption point
//! wants: the name of the instance hosting it and the name of the resource
//! inside that instance. The instance name is optional at declaration time
//! and defaults to [`DEFAULT_INSTANCE`] during validation.

use serde::{Deserialize, Serialize};

/// Instance name used when a descriptor does not specify one.
pub const DEFAULT_INSTANCE: &str = "default";

/// A declared request for a derived resource.
///
/// The resource name is required; validation rejects descriptors where it is
/// empty. The instance name may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Name of the instance hosting the resource, if specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Name of the resource inside the instance.
    pub resource: String,
}

impl ResourceRef {
    /// Descriptor for a resource on the default instance.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            instance: None,
            resource: resource.into(),
        }
    }

    /// Descriptor for a resource on a named instance.
    pub fn with_instance(instance: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            instance: Some(instance.into()),
            resource: resource.into(),
        }
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.instance {
            Some(instance) => write!(f, "{}/{}", instance, self.resource),
            None => write!(f, "{}", self.resource),
        }
    }
}

/// A validated descriptor: instance name filled in, resource name non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedRef {
    /// Name of the instance hosting the resource.
    pub instance: String,

    /// Name of the resource inside the instance.
    pub resource: String,
}

impl std::fmt::Display for ResolvedRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.instance, self.resource)
    }
}
