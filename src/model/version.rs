use std::collections::HashMap;

use serde::Serialize;

/// A version as stored in the registry and as rendered in Jira
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRegistryVersion {
    pub version: String,
    pub jira_version: String,
}

/// The five version flavors derived from one component version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedComponentVersion {
    pub component: String,
    pub line_version: ComponentRegistryVersion,
    pub minor_version: ComponentRegistryVersion,
    pub build_version: ComponentRegistryVersion,
    pub rc_version: ComponentRegistryVersion,
    pub release_version: ComponentRegistryVersion,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailedComponentVersions {
    pub versions: HashMap<String, DetailedComponentVersion>,
}

impl DetailedComponentVersions {
    pub fn get(&self, version: &str) -> Option<&DetailedComponentVersion> {
        self.versions.get(version)
    }
}

/// Names of the placeholder tokens the registry uses in version formats
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionNames {
    pub service_branch: String,
    pub service: String,
    pub minor: String,
}
