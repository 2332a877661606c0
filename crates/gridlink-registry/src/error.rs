//! Registry error types

use thiserror::Error;

/// Errors surfaced by the registry and the resources it hands out.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No instance has been started under this name.
    #[error("instance not found: {0}")]
    InstanceNotFound(String),

    /// The underlying client failed to join or initialize. Typically fatal
    /// for that name; the name is left absent so a later start may retry.
    #[error("failed to start instance {name}")]
    StartFailed {
        name: String,
        #[source]
        source: ConnectError,
    },

    /// A cache of this name already exists with different key/value types.
    #[error("cache {0} already exists with different key/value types")]
    CacheTypeMismatch(String),

    /// Resource acquisition on an instance that stop-all already tore down.
    #[error("instance {0} is stopped")]
    InstanceStopped(String),
}

/// Errors a [`ClusterConnector`](crate::ClusterConnector) may report while
/// joining the cluster.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Join negotiation exceeded the configured bound.
    #[error("cluster join timed out after {0} ms")]
    JoinTimeout(u64),

    /// The supplied instance configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Any other failure reported by the underlying client.
    #[error("{0}")]
    Client(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
