use std::fmt;

/// One cache per query shape served by the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheId {
    AllComponents,
    Component,
    IsVersionMinor,
    MinorVersionByVersion,
    MinorVersionByVersionNameAndProject,
    JiraComponentByProjectVersion,
    JiraComponentsByProjectKey,
    JiraComponentVersionRangesByProjectKey,
    DistributionByJiraProjectVersion,
    DistributionByComponentVersion,
    VcsSettingsByJiraProjectVersion,
    VcsSettingsByComponentVersion,
    DistributionByProjectKey,
    IsComponentExistsByProjectVersion,
    IsComponentExistsByProjectKey,
    JiraComponentByComponentVersion,
    AllJiraComponentVersionRanges,
    DetailedComponentVersion,
    DetailedComponentVersions,
}

impl CacheId {
    /// Every cache, in clearing order
    ///
    /// A cache whose loader reads another cache comes after it, so a load
    /// racing a full clear cannot refill it from data about to be dropped.
    pub const ALL: [CacheId; 19] = [
        CacheId::AllComponents,
        CacheId::Component,
        CacheId::JiraComponentByProjectVersion,
        CacheId::MinorVersionByVersionNameAndProject,
        CacheId::MinorVersionByVersion,
        CacheId::IsVersionMinor,
        CacheId::JiraComponentsByProjectKey,
        CacheId::JiraComponentVersionRangesByProjectKey,
        CacheId::DistributionByJiraProjectVersion,
        CacheId::DistributionByComponentVersion,
        CacheId::VcsSettingsByJiraProjectVersion,
        CacheId::VcsSettingsByComponentVersion,
        CacheId::DistributionByProjectKey,
        CacheId::IsComponentExistsByProjectVersion,
        CacheId::IsComponentExistsByProjectKey,
        CacheId::JiraComponentByComponentVersion,
        CacheId::AllJiraComponentVersionRanges,
        CacheId::DetailedComponentVersion,
        CacheId::DetailedComponentVersions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheId::AllComponents => "ALL_COMPONENTS",
            CacheId::Component => "COMPONENT",
            CacheId::IsVersionMinor => "IS_VERSION_MINOR",
            CacheId::MinorVersionByVersion => "MINOR_VERSION_BY_VERSION",
            CacheId::MinorVersionByVersionNameAndProject => {
                "MINOR_VERSION_BY_VERSION_NAME_AND_PROJECT"
            }
            CacheId::JiraComponentByProjectVersion => "JIRA_COMPONENT_BY_PROJECT_VERSION",
            CacheId::JiraComponentsByProjectKey => "JIRA_COMPONENTS_BY_PROJECT_KEY",
            CacheId::JiraComponentVersionRangesByProjectKey => {
                "JIRA_COMPONENT_VERSION_RANGES_BY_PROJECT_KEY"
            }
            CacheId::DistributionByJiraProjectVersion => "DISTRIBUTION_BY_JIRA_PROJECT_VERSION",
            CacheId::DistributionByComponentVersion => "DISTRIBUTION_BY_COMPONENT_VERSION",
            CacheId::VcsSettingsByJiraProjectVersion => "VCS_SETTINGS_BY_JIRA_PROJECT_VERSION",
            CacheId::VcsSettingsByComponentVersion => "VCS_SETTINGS_BY_COMPONENT_VERSION",
            CacheId::DistributionByProjectKey => "DISTRIBUTION_BY_PROJECT_KEY",
            CacheId::IsComponentExistsByProjectVersion => "IS_COMPONENT_EXISTS_BY_PROJECT_VERSION",
            CacheId::IsComponentExistsByProjectKey => "IS_COMPONENT_EXISTS_BY_PROJECT_KEY",
            CacheId::JiraComponentByComponentVersion => "JIRA_COMPONENT_BY_COMPONENT_VERSION",
            CacheId::AllJiraComponentVersionRanges => "ALL_JIRA_COMPONENT_VERSION_RANGES",
            CacheId::DetailedComponentVersion => "DETAILED_COMPONENT_VERSION",
            CacheId::DetailedComponentVersions => "DETAILED_COMPONENT_VERSIONS",
        }
    }
}

impl fmt::Display for CacheId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
