//! Running instance handle
//!
//! A GridInstance is one running client connection into the clustered
//! runtime, identified by name. It is owned exclusively by the registry as
//! an `Arc`; resolver and callers clone the `Arc` but only the registry's
//! stop-all transitions it to `Stopped`.

use crate::cache::CacheHandle;
use crate::error::{RegistryError, Result};
use crate::node::GridNode;
use crate::stream::StreamHandle;
use chrono::{DateTime, Utc};
use gridlink_types::{InstanceConfig, InstanceStatus};
use parking_lot::RwLock;
use std::hash::Hash;

/// A running clustered-runtime client instance.
pub struct GridInstance {
    name: String,
    config: InstanceConfig,
    node: GridNode,
    status: RwLock<InstanceStatus>,
    started_at: DateTime<Utc>,
}

impl GridInstance {
    pub(crate) fn new(name: impl Into<String>, config: InstanceConfig, node: GridNode) -> Self {
        Self {
            name: name.into(),
            config,
            node,
            status: RwLock::new(InstanceStatus::Running),
            started_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration this instance was started with. First start wins:
    /// configs passed to later start calls for the same name are discarded.
    pub fn config(&self) -> &InstanceConfig {
        &self.config
    }

    pub fn status(&self) -> InstanceStatus {
        *self.status.read()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Get or create the named cache. Shared semantics: every call for the
    /// same name yields a wrapper over the same underlying mapping. The
    /// node's get-or-create is the concurrency anchor; no caller-side
    /// locking is needed or added.
    pub fn get_or_create_cache<K, V>(&self, name: &str) -> Result<CacheHandle<K, V>>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        self.ensure_running()?;
        let entries = self.node.get_or_create_cache::<K, V>(name)?;
        Ok(CacheHandle::new(name, entries))
    }

    /// Create a fresh buffered streamer into the named mapping. Always-new
    /// semantics: each call returns a handle with its own buffer, and the
    /// handle must be closed to flush.
    pub fn data_streamer<K, V>(&self, name: &str) -> Result<StreamHandle<K, V>>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        self.ensure_running()?;
        let target = self.node.get_or_create_cache::<K, V>(name)?;
        Ok(StreamHandle::new(name, target, self.config.stream_buffer_size))
    }

    pub(crate) fn mark_stopped(&self) {
        *self.status.write() = InstanceStatus::Stopped;
    }

    fn ensure_running(&self) -> Result<()> {
        if self.status().is_running() {
            Ok(())
        } else {
            Err(RegistryError::InstanceStopped(self.name.clone()))
        }
    }
}

impl std::fmt::Debug for GridInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridInstance")
            .field("name", &self.name)
            .field("status", &self.status())
            .field("started_at", &self.started_at)
            .finish()
    }
}
