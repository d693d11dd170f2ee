//! Domain model returned by the registry facade
//!
//! Every type here is an immutable value built by the DTO mapper
//! ([`crate::registry::mapper`]). Nothing in this module talks to the network.

pub mod component;
pub mod jira;
pub mod keys;
pub mod vcs;
pub mod version;

pub use component::{Component, Distribution};
pub use jira::{
    ComponentInfo, ComponentVersionFormat, JiraComponent, JiraComponentVersion,
    JiraComponentVersionRange,
};
pub use keys::{ComponentVersion, JiraProjectVersion, JiraVersion};
pub use vcs::{RepositoryType, VcsSettings, VersionControlSystemRoot};
pub use version::{
    ComponentRegistryVersion, DetailedComponentVersion, DetailedComponentVersions, VersionNames,
};
