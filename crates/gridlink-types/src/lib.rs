//! Gridlink types - descriptors, configuration, and status
//!
//! This crate is the leaf of the gridlink workspace. It holds:
//!
//! - **ResourceRef / ResolvedRef**: the reference descriptor a consumption
//!   point declares, and its validated form
//! - **InstanceConfig / GridConfig**: per-instance client configuration and
//!   the name-keyed collection a host's configuration binding produces
//! - **InstanceStatus**: the lifecycle states of a named instance
//!
//! Configuration *types* live here; loading and binding configuration files
//! is the host's concern.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod config;
pub mod descriptor;
pub mod status;

// Re-exports
pub use config::{GridConfig, InstanceConfig};
pub use descriptor::{ResolvedRef, ResourceRef, DEFAULT_INSTANCE};
pub use status::InstanceStatus;
