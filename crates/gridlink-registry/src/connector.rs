//! Cluster connector seam
//!
//! The connector is the boundary to the external clustered runtime: it takes
//! a name and an instance configuration and performs the (potentially slow,
//! externally bounded) cluster join, yielding the node the registry wraps.
//!
//! [`EmbeddedConnector`] is the in-process implementation, suitable for
//! development and testing. Production deployments implement
//! [`ClusterConnector`] over a real data-grid client; everything above the
//! connector is unchanged.

use crate::error::ConnectError;
use crate::node::GridNode;
use gridlink_types::InstanceConfig;

/// Joins the clustered runtime on behalf of one named instance.
pub trait ClusterConnector: Send + Sync {
    /// Perform the cluster join for `name` under `config`.
    ///
    /// May block for a non-trivial duration; the bound comes from the
    /// configuration (`join_timeout_ms`), not from the caller.
    fn connect(&self, name: &str, config: &InstanceConfig) -> Result<GridNode, ConnectError>;
}

/// In-process connector: every join yields a fresh self-contained node.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedConnector;

impl ClusterConnector for EmbeddedConnector {
    fn connect(&self, name: &str, config: &InstanceConfig) -> Result<GridNode, ConnectError> {
        if config.stream_buffer_size == 0 {
            return Err(ConnectError::InvalidConfig(
                "stream_buffer_size must be non-zero".to_string(),
            ));
        }
        tracing::debug!(instance = name, "embedded node joined");
        Ok(GridNode::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_connect_succeeds_with_defaults() {
        let node = EmbeddedConnector
            .connect("default", &InstanceConfig::default())
            .unwrap();
        assert_eq!(node.cache_count(), 0);
    }

    #[test]
    fn embedded_connect_rejects_zero_buffer() {
        let config = InstanceConfig {
            stream_buffer_size: 0,
            ..InstanceConfig::default()
        };
        let err = EmbeddedConnector.connect("default", &config).unwrap_err();
        assert!(matches!(err, ConnectError::InvalidConfig(_)));
    }
}
