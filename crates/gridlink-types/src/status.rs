//! Instance lifecycle status

use serde::{Deserialize, Serialize};

/// Lifecycle states of a named instance.
///
/// `Starting -> Running` on a successful cluster join. A failed start is
/// represented by the name being absent from the registry with the error
/// surfaced to the caller, so there is no `Failed` state here. `Stopped` is
/// terminal and is only entered through the registry's stop-all teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    /// Cluster join in progress.
    Starting,
    /// Joined and serving resource requests.
    Running,
    /// Torn down; resource requests are rejected.
    Stopped,
}

impl InstanceStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, InstanceStatus::Running)
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InstanceStatus::Starting => "starting",
            InstanceStatus::Running => "running",
            InstanceStatus::Stopped => "stopped",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_running_is_running() {
        assert!(InstanceStatus::Running.is_running());
        assert!(!InstanceStatus::Starting.is_running());
        assert!(!InstanceStatus::Stopped.is_running());
    }

    #[test]
    fn display_matches_serde() {
        for status in [
            InstanceStatus::Starting,
            InstanceStatus::Running,
            InstanceStatus::Stopped,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
