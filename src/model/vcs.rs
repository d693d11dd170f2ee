//! Version control settings of a component version

use serde::Serialize;

/// Marker the registry uses when VCS settings live in an external registry
/// that cannot be reached
const NOT_AVAILABLE_MARKER: &str = "NOT_AVAILABLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepositoryType {
    Cvs,
    Mercurial,
    Git,
}

impl RepositoryType {
    /// Branch used when a root does not name one explicitly
    pub fn default_branch(&self) -> &'static str {
        match self {
            RepositoryType::Cvs => "HEAD",
            RepositoryType::Mercurial => "default",
            RepositoryType::Git => "master",
        }
    }
}

/// One VCS location backing a component version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionControlSystemRoot {
    pub name: String,
    pub repository_type: RepositoryType,
    pub vcs_path: Option<String>,
    pub tag: Option<String>,
    pub branch: String,
    pub hotfix_branch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VcsSettings {
    pub external_registry: Option<String>,
    pub version_control_system_roots: Vec<VersionControlSystemRoot>,
}

impl VcsSettings {
    /// True when the settings are kept in an external registry
    pub fn has_external_registry(&self) -> bool {
        self.external_registry
            .as_deref()
            .is_some_and(|registry| !registry.trim().is_empty())
    }

    pub fn not_available(&self) -> bool {
        self.external_registry.as_deref() == Some(NOT_AVAILABLE_MARKER)
    }

    /// No roots at all, or a single placeholder root without a path
    pub fn has_no_configured_vcs_root(&self) -> bool {
        match self.version_control_system_roots.as_slice() {
            [] => true,
            [only] => only.vcs_path.is_none(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn root(vcs_path: Option<&str>) -> VersionControlSystemRoot {
        VersionControlSystemRoot {
            name: "main".to_string(),
            repository_type: RepositoryType::Git,
            vcs_path: vcs_path.map(str::to_string),
            tag: None,
            branch: "master".to_string(),
            hotfix_branch: None,
        }
    }

    #[rstest]
    #[case(RepositoryType::Cvs, "HEAD")]
    #[case(RepositoryType::Mercurial, "default")]
    #[case(RepositoryType::Git, "master")]
    fn default_branch_is_fixed_per_repository_type(
        #[case] repository_type: RepositoryType,
        #[case] expected: &str,
    ) {
        assert_eq!(repository_type.default_branch(), expected);
    }

    #[rstest]
    #[case(vec![], true)]
    #[case(vec![None], true)]
    #[case(vec![Some("ssh://git@example.com/app.git")], false)]
    #[case(vec![None, None], false)]
    #[case(vec![Some("ssh://a.git"), Some("ssh://b.git")], false)]
    fn has_no_configured_vcs_root_returns_expected(
        #[case] paths: Vec<Option<&str>>,
        #[case] expected: bool,
    ) {
        let settings = VcsSettings {
            external_registry: None,
            version_control_system_roots: paths.into_iter().map(root).collect(),
        };
        assert_eq!(settings.has_no_configured_vcs_root(), expected);
    }

    #[rstest]
    #[case(None, false, false)]
    #[case(Some("   "), false, false)]
    #[case(Some("releng-registry"), true, false)]
    #[case(Some("NOT_AVAILABLE"), true, true)]
    fn external_registry_markers(
        #[case] marker: Option<&str>,
        #[case] external: bool,
        #[case] not_available: bool,
    ) {
        let settings = VcsSettings {
            external_registry: marker.map(str::to_string),
            version_control_system_roots: vec![],
        };
        assert_eq!(settings.has_external_registry(), external);
        assert_eq!(settings.not_available(), not_available);
    }
}
