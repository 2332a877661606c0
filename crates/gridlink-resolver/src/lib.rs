//! Gridlink resolver - reference descriptor to derived resource
//!
//! A consumption point declares a [`ResourceRef`](gridlink_types::ResourceRef)
//! (instance name + resource name); the resolver validates it, locates or
//! lazily starts the named instance in the
//! [`InstanceRegistry`](gridlink_registry::InstanceRegistry), and applies the
//! acquisition policy of the requested resource kind:
//!
//! - caches are **get-or-create shared**: one underlying mapping per name,
//!   a fresh wrapper per resolution
//! - streamers are **always new**: a fresh buffered handle per resolution
//!   that the caller must close to flush

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod error;
pub mod resolver;

// Re-exports
pub use error::{ResolveError, Result};
pub use resolver::ResourceResolver;
