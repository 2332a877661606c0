//! Resolver error types

use gridlink_registry::RegistryError;
use thiserror::Error;

/// Errors surfaced during descriptor resolution.
///
/// Registry failures pass through unchanged; the resolver performs no
/// retry, recovery, or fallback to a default instance.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The descriptor omitted the required resource name.
    #[error("missing resource name")]
    MissingResourceName,

    /// Failure from the instance registry, propagated unchanged.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resource_name_message() {
        assert_eq!(
            ResolveError::MissingResourceName.to_string(),
            "missing resource name"
        );
    }

    #[test]
    fn registry_errors_pass_through_unchanged() {
        let err: ResolveError = RegistryError::InstanceNotFound("analytics".into()).into();
        assert_eq!(err.to_string(), "instance not found: analytics");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolveError>();
    }
}
