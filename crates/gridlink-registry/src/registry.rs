//! Instance registry
//!
//! Owns the set of named instances. Guarantees exactly one instance per
//! distinct name, serializes concurrent starts per name (never globally),
//! and tears everything down at once, idempotently.

use crate::connector::{ClusterConnector, EmbeddedConnector};
use crate::error::{RegistryError, Result};
use crate::instance::GridInstance;
use dashmap::DashMap;
use gridlink_types::{GridConfig, InstanceConfig};
use parking_lot::Mutex;
use std::sync::Arc;

/// Registry of named clustered-runtime client instances.
///
/// The name-to-instance map is the only shared mutable state at this layer;
/// all mutation goes through [`start`](Self::start) and
/// [`stop_all`](Self::stop_all). Instances themselves are internally
/// thread-safe for concurrent resource access.
pub struct InstanceRegistry {
    instances: DashMap<String, Arc<GridInstance>>,
    // One gate per name: a slow cluster join for one name must not block
    // starts of unrelated names.
    start_gates: DashMap<String, Arc<Mutex<()>>>,
    connector: Arc<dyn ClusterConnector>,
    config: GridConfig,
}

impl InstanceRegistry {
    pub fn new(connector: Arc<dyn ClusterConnector>) -> Self {
        Self {
            instances: DashMap::new(),
            start_gates: DashMap::new(),
            connector,
            config: GridConfig::default(),
        }
    }

    /// Registry backed by the in-process embedded connector.
    pub fn embedded() -> Self {
        Self::new(Arc::new(EmbeddedConnector))
    }

    /// Supply named configurations, enabling [`start_all`](Self::start_all)
    /// and lazy auto-start during [`get_or_start`](Self::get_or_start).
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Start the instance named `name`, or return the existing one.
    ///
    /// Idempotent per name: if an instance already exists, it is returned
    /// unchanged and `config` is neither compared nor applied (first start
    /// wins). Concurrent starts of the same name are serialized by a
    /// per-name gate; the losing caller observes the winner's instance.
    ///
    /// On connector failure the error is surfaced unchanged inside
    /// [`RegistryError::StartFailed`] and the name is left absent, so a
    /// later start may retry from scratch.
    pub fn start(&self, name: &str, config: InstanceConfig) -> Result<Arc<GridInstance>> {
        if let Some(existing) = self.instances.get(name) {
            return Ok(existing.clone());
        }

        let gate = self.start_gates.entry(name.to_string()).or_default().clone();
        let _guard = gate.lock();

        // Lost the race: the winner inserted while we waited on the gate.
        if let Some(existing) = self.instances.get(name) {
            return Ok(existing.clone());
        }

        tracing::info!(instance = name, "starting instance");
        let node = self.connector.connect(name, &config).map_err(|source| {
            tracing::error!(instance = name, error = %source, "failed to start instance");
            RegistryError::StartFailed {
                name: name.to_string(),
                source,
            }
        })?;

        let instance = Arc::new(GridInstance::new(name, config, node));
        self.instances.insert(name.to_string(), instance.clone());
        tracing::info!(instance = name, "instance running");
        Ok(instance)
    }

    /// Eagerly start every configured instance, for host bootstrap. The
    /// first failure aborts and propagates; whether a failed name is fatal
    /// to the whole process is the host's decision.
    pub fn start_all(&self) -> Result<Vec<Arc<GridInstance>>> {
        self.config
            .instances
            .iter()
            .map(|(name, instance_config)| self.start(name, instance_config.clone()))
            .collect()
    }

    /// The instance named `name`, if it has been started.
    pub fn get(&self, name: &str) -> Result<Arc<GridInstance>> {
        self.instances
            .get(name)
            .map(|entry| entry.clone())
            .ok_or_else(|| RegistryError::InstanceNotFound(name.to_string()))
    }

    /// [`get`](Self::get), falling back to a lazy start when a configuration
    /// for `name` was supplied via [`with_config`](Self::with_config).
    pub fn get_or_start(&self, name: &str) -> Result<Arc<GridInstance>> {
        if let Some(existing) = self.instances.get(name) {
            return Ok(existing.clone());
        }
        match self.config.get(name) {
            Some(instance_config) => self.start(name, instance_config.clone()),
            None => Err(RegistryError::InstanceNotFound(name.to_string())),
        }
    }

    /// Stop every started instance and release cluster resources.
    ///
    /// Idempotent: the second and later calls are no-ops. Must run exactly
    /// once during orderly shutdown, after consumers have released their
    /// handles; the registry keeps no record of outstanding handles, so that
    /// ordering is the host's responsibility.
    pub fn stop_all(&self) {
        if self.instances.is_empty() {
            return;
        }
        for entry in self.instances.iter() {
            entry.value().mark_stopped();
            tracing::info!(instance = entry.key().as_str(), "instance stopped");
        }
        self.instances.clear();
        self.start_gates.clear();
    }

    /// Number of running instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Names of all running instances.
    pub fn instance_names(&self) -> Vec<String> {
        self.instances.iter().map(|e| e.key().clone()).collect()
    }
}

impl Default for InstanceRegistry {
    fn default() -> Self {
        Self::embedded()
    }
}

impl std::fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("instances", &self.instances.len())
            .field("configured", &self.config.instances.len())
            .finish()
    }
}
