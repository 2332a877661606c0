//! Resource resolver
//!
//! Translates a validated reference descriptor into a concrete derived
//! resource, applying the per-kind acquisition policy. The resolver holds
//! only a shared reference to the registry; it owns no instances and adds no
//! locking of its own around cache creation (the instance's get-or-create is
//! already thread-safe).

use crate::error::{ResolveError, Result};
use gridlink_registry::{CacheHandle, InstanceRegistry, StreamHandle};
use gridlink_types::{ResolvedRef, ResourceRef, DEFAULT_INSTANCE};
use std::hash::Hash;
use std::sync::Arc;

/// Resolves reference descriptors against an [`InstanceRegistry`].
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    registry: Arc<InstanceRegistry>,
}

impl ResourceResolver {
    pub fn new(registry: Arc<InstanceRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this resolver resolves against.
    pub fn registry(&self) -> &Arc<InstanceRegistry> {
        &self.registry
    }

    /// Validate a descriptor: the resource name is required and non-empty;
    /// a missing instance name defaults to [`DEFAULT_INSTANCE`].
    pub fn validate(descriptor: &ResourceRef) -> Result<ResolvedRef> {
        if descriptor.resource.is_empty() {
            return Err(ResolveError::MissingResourceName);
        }
        let instance = match &descriptor.instance {
            Some(name) if !name.is_empty() => name.clone(),
            _ => DEFAULT_INSTANCE.to_string(),
        };
        Ok(ResolvedRef {
            instance,
            resource: descriptor.resource.clone(),
        })
    }

    /// Resolve a descriptor to a cache handle.
    ///
    /// Get-or-create semantics: re-resolving the same descriptor yields a
    /// fresh wrapper over the same underlying mapping. The instance is
    /// looked up in the registry, lazily started if the registry carries a
    /// configuration for its name.
    pub fn resolve_cache<K, V>(&self, descriptor: &ResourceRef) -> Result<CacheHandle<K, V>>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        let resolved = Self::validate(descriptor)?;
        tracing::debug!(descriptor = %resolved, "resolving cache");
        let instance = self.registry.get_or_start(&resolved.instance)?;
        Ok(instance.get_or_create_cache(&resolved.resource)?)
    }

    /// Resolve a descriptor to a stream handle.
    ///
    /// Always-new semantics: every call creates a fresh handle with its own
    /// buffer. The handle's scope belongs to the caller, who must close it
    /// on every exit path; buffered entries in a handle that is dropped
    /// instead are lost.
    pub fn resolve_stream<K, V>(&self, descriptor: &ResourceRef) -> Result<StreamHandle<K, V>>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        let resolved = Self::validate(descriptor)?;
        tracing::debug!(descriptor = %resolved, "resolving stream");
        let instance = self.registry.get_or_start(&resolved.instance)?;
        Ok(instance.data_streamer(&resolved.resource)?)
    }
}
