//! Registry client trait consumed by the caching facade

use std::collections::{HashMap, HashSet};

#[cfg(test)]
use mockall::automock;

use crate::error::ClientError;
use crate::registry::dto::{
    ComponentDto, ComponentsDto, DetailedComponentVersionDto, DetailedComponentVersionsDto,
    DistributionDto, JiraComponentVersionDto, JiraComponentVersionRangeDto, ServiceStatusDto,
    VcsSettingsDto, VersionNamesDto, VersionRequestDto,
};

/// Synchronous request/response access to the components registry
///
/// Every method either returns the DTO or a [`ClientError`]. Implementations
/// must report a connection failure or timeout as a transport error
/// ([`ClientError::is_transport`]) and any answer from the registry that is
/// not a success as one of the logical variants.
#[cfg_attr(test, automock)]
pub trait RegistryClient: Send + Sync {
    fn get_all_components(&self) -> Result<ComponentsDto, ClientError>;

    fn get_component(&self, component: &str) -> Result<ComponentDto, ClientError>;

    fn get_jira_component_by_project_and_version(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<JiraComponentVersionDto, ClientError>;

    fn get_jira_components_by_project(
        &self,
        project_key: &str,
    ) -> Result<HashSet<String>, ClientError>;

    fn get_jira_component_version_ranges_by_project(
        &self,
        project_key: &str,
    ) -> Result<Vec<JiraComponentVersionRangeDto>, ClientError>;

    fn get_distribution_for_project(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<DistributionDto, ClientError>;

    fn get_component_distribution(
        &self,
        component: &str,
        version: &str,
    ) -> Result<DistributionDto, ClientError>;

    fn get_vcs_settings_for_project(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<VcsSettingsDto, ClientError>;

    fn get_vcs_settings(
        &self,
        component: &str,
        version: &str,
    ) -> Result<VcsSettingsDto, ClientError>;

    fn get_components_distribution_by_jira_project(
        &self,
        project_key: &str,
    ) -> Result<HashMap<String, DistributionDto>, ClientError>;

    fn get_jira_component_for_component_and_version(
        &self,
        component: &str,
        version: &str,
    ) -> Result<JiraComponentVersionDto, ClientError>;

    fn get_all_jira_component_version_ranges(
        &self,
    ) -> Result<Vec<JiraComponentVersionRangeDto>, ClientError>;

    fn get_detailed_component_version(
        &self,
        component: &str,
        version: &str,
    ) -> Result<DetailedComponentVersionDto, ClientError>;

    fn get_detailed_component_versions(
        &self,
        component: &str,
        request: &VersionRequestDto,
    ) -> Result<DetailedComponentVersionsDto, ClientError>;

    fn get_version_names(&self) -> Result<VersionNamesDto, ClientError>;

    /// Current registry status, including when its data last changed
    fn get_service_status(&self) -> Result<ServiceStatusDto, ClientError>;
}
