//! Wire representations of the registry REST API

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentsDto {
    pub components: Vec<ComponentDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDto {
    pub id: String,
    pub name: Option<String>,
    pub component_owner: Option<String>,
    pub release_manager: Option<String>,
    pub distribution: Option<DistributionDto>,
    #[serde(default)]
    pub archived: bool,
    pub releases_in_default_branch: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionDto {
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub external: bool,
    pub gav: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepositoryTypeDto {
    Cvs,
    Mercurial,
    Git,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionControlSystemRootDto {
    pub name: String,
    #[serde(rename = "type")]
    pub repository_type: RepositoryTypeDto,
    pub vcs_path: Option<String>,
    pub tag: Option<String>,
    pub branch: String,
    pub hotfix_branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcsSettingsDto {
    pub external_registry: Option<String>,
    #[serde(default)]
    pub version_control_system_roots: Vec<VersionControlSystemRootDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVersionFormatDto {
    pub major_version_format: String,
    pub release_version_format: String,
    pub build_version_format: Option<String>,
    pub line_version_format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentInfoDto {
    pub version_prefix: String,
    pub version_format: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraComponentDto {
    pub project_key: String,
    pub display_name: Option<String>,
    pub component_version_format: ComponentVersionFormatDto,
    #[serde(default)]
    pub component_info: ComponentInfoDto,
    #[serde(default)]
    pub technical: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraComponentVersionDto {
    pub name: String,
    pub version: String,
    pub component: JiraComponentDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraComponentVersionRangeDto {
    pub component_name: String,
    pub version_range: String,
    pub component: JiraComponentDto,
    pub distribution: DistributionDto,
    pub vcs_settings: VcsSettingsDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionNamesDto {
    pub service_branch: String,
    pub service: String,
    pub minor: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentRegistryVersionDto {
    pub version: String,
    pub jira_version: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedComponentVersionDto {
    pub component: String,
    #[serde(default)]
    pub line_version: ComponentRegistryVersionDto,
    #[serde(default)]
    pub minor_version: ComponentRegistryVersionDto,
    #[serde(default)]
    pub build_version: ComponentRegistryVersionDto,
    #[serde(default)]
    pub rc_version: ComponentRegistryVersionDto,
    #[serde(default)]
    pub release_version: ComponentRegistryVersionDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailedComponentVersionsDto {
    #[serde(default)]
    pub versions: HashMap<String, DetailedComponentVersionDto>,
}

/// Body of the bulk detailed-versions request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRequestDto {
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatusDto {
    pub cache_updated_at: DateTime<Utc>,
}
