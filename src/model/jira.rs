//! Jira linkage of registry components

use serde::Serialize;

use crate::model::component::Distribution;
use crate::model::keys::ComponentVersion;
use crate::model::vcs::VcsSettings;

/// Version naming templates of a component, e.g. `$major.$minor`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVersionFormat {
    pub major_version_format: String,
    pub release_version_format: String,
    pub build_version_format: String,
    pub line_version_format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub version_prefix: String,
    pub version_format: String,
}

/// Jira project a component is tracked in, with its version conventions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraComponent {
    pub project_key: String,
    pub display_name: Option<String>,
    pub component_version_format: ComponentVersionFormat,
    pub component_info: ComponentInfo,
    pub technical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraComponentVersion {
    pub component_version: ComponentVersion,
    pub component: JiraComponent,
}

/// Binds a registry component's version range to a Jira component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraComponentVersionRange {
    pub component_name: String,
    pub version_range: String,
    pub jira_component: JiraComponent,
    pub distribution: Distribution,
    pub vcs_settings: VcsSettings,
}
