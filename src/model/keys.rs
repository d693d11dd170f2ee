//! Composite lookup keys
//!
//! These are both domain values and cache keys, so they all derive
//! `Eq + Hash` and own their strings.

use serde::Serialize;

/// A Jira project key paired with a version name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraProjectVersion {
    pub project_key: String,
    pub version: String,
}

impl JiraProjectVersion {
    pub fn new(project_key: &str, version: &str) -> Self {
        Self {
            project_key: project_key.to_string(),
            version: version.to_string(),
        }
    }
}

/// A registry component name paired with one of its versions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVersion {
    pub component_name: String,
    pub version: String,
}

impl ComponentVersion {
    pub fn new(component_name: &str, version: &str) -> Self {
        Self {
            component_name: component_name.to_string(),
            version: version.to_string(),
        }
    }
}

/// Key fields of a host application's Jira version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraVersion {
    pub project_key: String,
    pub name: String,
}

impl JiraVersion {
    pub fn new(project_key: &str, name: &str) -> Self {
        Self {
            project_key: project_key.to_string(),
            name: name.to_string(),
        }
    }

    pub fn project_version(&self) -> JiraProjectVersion {
        JiraProjectVersion::new(&self.project_key, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jira_version_maps_to_project_version() {
        let version = JiraVersion::new("PROJ", "1.2.3");
        assert_eq!(
            version.project_version(),
            JiraProjectVersion::new("PROJ", "1.2.3")
        );
    }
}
