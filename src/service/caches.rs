//! The facade's cache table: one memo per query shape

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::cache::{CacheId, CacheTable, Clearable, Memo};
use crate::model::{
    Component, ComponentVersion, DetailedComponentVersion, DetailedComponentVersions,
    Distribution, JiraComponentVersion, JiraComponentVersionRange, JiraProjectVersion, JiraVersion,
    VcsSettings,
};
use crate::service::ComponentRegistryService;
use crate::service::loaders;

/// Key of the minor-version-by-name cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MinorVersionRequest {
    pub version_name: String,
    pub project_key: String,
}

/// Key of the bulk detailed-versions cache
///
/// The versions are held in a sorted set so that the same versions requested
/// in any order resolve to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DetailedVersionsRequest {
    pub component: String,
    pub versions: BTreeSet<String>,
}

type ServiceMemo<K, V> = Memo<ComponentRegistryService, K, V>;

pub(crate) struct RegistryCaches {
    pub all_components: ServiceMemo<(), Vec<Component>>,
    pub component: ServiceMemo<String, Option<Component>>,
    pub is_version_minor: ServiceMemo<JiraVersion, bool>,
    pub minor_version_by_version: ServiceMemo<JiraVersion, Option<String>>,
    pub minor_version_by_name: ServiceMemo<MinorVersionRequest, Option<String>>,
    pub jira_component_by_project_version:
        ServiceMemo<JiraProjectVersion, Option<JiraComponentVersion>>,
    pub jira_components_by_project: ServiceMemo<String, HashSet<String>>,
    pub jira_component_version_ranges_by_project:
        ServiceMemo<String, HashSet<JiraComponentVersionRange>>,
    pub distribution_by_project_version: ServiceMemo<JiraProjectVersion, Option<Distribution>>,
    pub distribution_by_component_version: ServiceMemo<ComponentVersion, Option<Distribution>>,
    pub vcs_settings_by_project_version: ServiceMemo<JiraProjectVersion, Option<VcsSettings>>,
    pub vcs_settings_by_component_version: ServiceMemo<ComponentVersion, Option<VcsSettings>>,
    pub distribution_by_project: ServiceMemo<String, HashMap<String, Distribution>>,
    pub component_exists_by_project_version: ServiceMemo<JiraProjectVersion, bool>,
    pub component_exists_by_project: ServiceMemo<String, bool>,
    pub jira_component_by_component_version:
        ServiceMemo<ComponentVersion, Option<JiraComponentVersion>>,
    pub all_jira_component_version_ranges: ServiceMemo<(), HashSet<JiraComponentVersionRange>>,
    pub detailed_component_version: ServiceMemo<ComponentVersion, DetailedComponentVersion>,
    pub detailed_component_versions:
        ServiceMemo<DetailedVersionsRequest, DetailedComponentVersions>,
}

impl RegistryCaches {
    pub fn new() -> Self {
        Self {
            all_components: Memo::new(CacheId::AllComponents, loaders::all_components),
            component: Memo::new(CacheId::Component, loaders::component),
            is_version_minor: Memo::new(CacheId::IsVersionMinor, loaders::is_version_minor),
            minor_version_by_version: Memo::new(
                CacheId::MinorVersionByVersion,
                loaders::minor_version_by_version,
            ),
            minor_version_by_name: Memo::new(
                CacheId::MinorVersionByVersionNameAndProject,
                loaders::minor_version_by_name,
            ),
            jira_component_by_project_version: Memo::new(
                CacheId::JiraComponentByProjectVersion,
                loaders::jira_component_by_project_version,
            ),
            jira_components_by_project: Memo::new(
                CacheId::JiraComponentsByProjectKey,
                loaders::jira_components_by_project,
            ),
            jira_component_version_ranges_by_project: Memo::new(
                CacheId::JiraComponentVersionRangesByProjectKey,
                loaders::jira_component_version_ranges_by_project,
            ),
            distribution_by_project_version: Memo::new(
                CacheId::DistributionByJiraProjectVersion,
                loaders::distribution_by_project_version,
            ),
            distribution_by_component_version: Memo::new(
                CacheId::DistributionByComponentVersion,
                loaders::distribution_by_component_version,
            ),
            vcs_settings_by_project_version: Memo::new(
                CacheId::VcsSettingsByJiraProjectVersion,
                loaders::vcs_settings_by_project_version,
            ),
            vcs_settings_by_component_version: Memo::new(
                CacheId::VcsSettingsByComponentVersion,
                loaders::vcs_settings_by_component_version,
            ),
            distribution_by_project: Memo::new(
                CacheId::DistributionByProjectKey,
                loaders::distribution_by_project,
            ),
            component_exists_by_project_version: Memo::new(
                CacheId::IsComponentExistsByProjectVersion,
                loaders::component_exists_by_project_version,
            ),
            component_exists_by_project: Memo::new(
                CacheId::IsComponentExistsByProjectKey,
                loaders::component_exists_by_project,
            ),
            jira_component_by_component_version: Memo::new(
                CacheId::JiraComponentByComponentVersion,
                loaders::jira_component_by_component_version,
            ),
            all_jira_component_version_ranges: Memo::new(
                CacheId::AllJiraComponentVersionRanges,
                loaders::all_jira_component_version_ranges,
            ),
            detailed_component_version: Memo::new(
                CacheId::DetailedComponentVersion,
                loaders::detailed_component_version,
            ),
            detailed_component_versions: Memo::new(
                CacheId::DetailedComponentVersions,
                loaders::detailed_component_versions,
            ),
        }
    }
}

impl CacheTable for RegistryCaches {
    fn cache(&self, id: CacheId) -> &dyn Clearable {
        match id {
            CacheId::AllComponents => &self.all_components,
            CacheId::Component => &self.component,
            CacheId::IsVersionMinor => &self.is_version_minor,
            CacheId::MinorVersionByVersion => &self.minor_version_by_version,
            CacheId::MinorVersionByVersionNameAndProject => &self.minor_version_by_name,
            CacheId::JiraComponentByProjectVersion => &self.jira_component_by_project_version,
            CacheId::JiraComponentsByProjectKey => &self.jira_components_by_project,
            CacheId::JiraComponentVersionRangesByProjectKey => {
                &self.jira_component_version_ranges_by_project
            }
            CacheId::DistributionByJiraProjectVersion => &self.distribution_by_project_version,
            CacheId::DistributionByComponentVersion => &self.distribution_by_component_version,
            CacheId::VcsSettingsByJiraProjectVersion => &self.vcs_settings_by_project_version,
            CacheId::VcsSettingsByComponentVersion => &self.vcs_settings_by_component_version,
            CacheId::DistributionByProjectKey => &self.distribution_by_project,
            CacheId::IsComponentExistsByProjectVersion => {
                &self.component_exists_by_project_version
            }
            CacheId::IsComponentExistsByProjectKey => &self.component_exists_by_project,
            CacheId::JiraComponentByComponentVersion => &self.jira_component_by_component_version,
            CacheId::AllJiraComponentVersionRanges => &self.all_jira_component_version_ranges,
            CacheId::DetailedComponentVersion => &self.detailed_component_version,
            CacheId::DetailedComponentVersions => &self.detailed_component_versions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cache_id_resolves_to_its_own_memo() {
        let caches = RegistryCaches::new();

        for id in CacheId::ALL {
            assert_eq!(caches.cache(id).id(), id);
        }
    }

    #[test]
    fn detailed_versions_request_ignores_enumeration_order() {
        let first = DetailedVersionsRequest {
            component: "app".to_string(),
            versions: ["2.1", "1.0"].into_iter().map(String::from).collect(),
        };
        let second = DetailedVersionsRequest {
            component: "app".to_string(),
            versions: ["1.0", "2.1"].into_iter().map(String::from).collect(),
        };

        assert_eq!(first, second);
    }
}
