//! Instance configuration types
//!
//! An InstanceConfig is opaque to the registry: it is handed unchanged to
//! the cluster connector that performs the join. A GridConfig is the
//! name-keyed collection of instance configurations a host's configuration
//! binding produces, one entry per configured instance name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for one clustered-runtime client instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Upper bound on cluster-join negotiation, in milliseconds. Enforced by
    /// the connector, not the registry.
    #[serde(default = "default_join_timeout_ms")]
    pub join_timeout_ms: u64,

    /// Seed addresses of the cluster to join. Empty means a self-contained
    /// embedded node.
    #[serde(default)]
    pub addresses: Vec<String>,

    /// Client-side buffer capacity for stream handles. Buffered entries are
    /// written through automatically once the buffer fills. Must be
    /// non-zero.
    #[serde(default = "default_stream_buffer_size")]
    pub stream_buffer_size: usize,
}

fn default_join_timeout_ms() -> u64 {
    10_000
}

fn default_stream_buffer_size() -> usize {
    512
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            join_timeout_ms: default_join_timeout_ms(),
            addresses: Vec::new(),
            stream_buffer_size: default_stream_buffer_size(),
        }
    }
}

/// Named instance configurations, as produced by a host's configuration
/// binding. Each entry yields one independently lifecycle-managed instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Instance configurations keyed by instance name.
    #[serde(default)]
    pub instances: HashMap<String, InstanceConfig>,
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for one named instance, if configured.
    pub fn get(&self, name: &str) -> Option<&InstanceConfig> {
        self.instances.get(name)
    }

    /// Add or replace the configuration for a named instance.
    pub fn insert(&mut self, name: impl Into<String>, config: InstanceConfig) -> &mut Self {
        self.instances.insert(name.into(), config);
        self
    }

    /// Names of all configured instances.
    pub fn instance_names(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_config_defaults() {
        let config = InstanceConfig::default();
        assert_eq!(config.join_timeout_ms, 10_000);
        assert!(config.addresses.is_empty());
        assert_eq!(config.stream_buffer_size, 512);
    }

    #[test]
    fn deserializes_with_omitted_fields() {
        let config: InstanceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InstanceConfig::default());

        let config: InstanceConfig =
            serde_json::from_str(r#"{"stream_buffer_size": 16}"#).unwrap();
        assert_eq!(config.stream_buffer_size, 16);
        assert_eq!(config.join_timeout_ms, 10_000);
    }

    #[test]
    fn grid_config_insert_and_lookup() {
        let mut grid = GridConfig::new();
        grid.insert("default", InstanceConfig::default())
            .insert("analytics", InstanceConfig::default());

        assert_eq!(grid.instances.len(), 2);
        assert!(grid.get("default").is_some());
        assert!(grid.get("missing").is_none());

        let mut names: Vec<_> = grid.instance_names().collect();
        names.sort_unstable();
        assert_eq!(names, ["analytics", "default"]);
    }

    #[test]
    fn grid_config_deserializes_named_instances() {
        let grid: GridConfig = serde_json::from_str(
            r#"{"instances": {"default": {}, "analytics": {"join_timeout_ms": 500}}}"#,
        )
        .unwrap();
        assert_eq!(grid.get("analytics").unwrap().join_timeout_ms, 500);
        assert_eq!(grid.get("default").unwrap().join_timeout_ms, 10_000);
    }
}
