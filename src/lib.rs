//! Read-through caching facade for a remote component registry
//!
//! [`ComponentRegistryService`] answers the registry queries a Jira-side
//! host needs (components, Jira component versions, distributions, VCS
//! settings, detailed versions) out of in-memory caches. The caches are
//! dropped as a whole whenever the registry reports new data.

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;
pub mod service;
pub mod version;

pub use cache::CacheId;
pub use error::{ClientError, RegistryError};
pub use registry::{HttpRegistryClient, RegistryClient};
pub use service::ComponentRegistryService;
