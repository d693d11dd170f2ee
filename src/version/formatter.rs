//! Version format templates
//!
//! The registry describes version conventions with templates such as
//! `$major.$minor` or `$major.$minor.$service`. The [`VersionFormatter`]
//! trait is what the facade consumes; [`TemplateVersionFormatter`] is the
//! default implementation built from the registry's [`VersionNames`].

use std::sync::LazyLock;

#[cfg(test)]
use mockall::automock;
use regex::{Captures, Regex};

use crate::model::{JiraComponent, JiraComponentVersion, VersionNames};

/// Numeric placeholders, in the order their values appear in a version
const NUMERIC_TOKENS: [&str; 5] = ["major", "minor", "service", "fix", "build"];

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z][A-Za-z0-9]*)").expect("valid token regex"));

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number regex"));

/// Matches and derives major (minor-line) versions of Jira components
#[cfg_attr(test, automock)]
pub trait VersionFormatter: Send + Sync {
    /// Whether `version` is written in the component's major version format
    fn matches_major_version_format(
        &self,
        jira_component_version: &JiraComponentVersion,
        version: &str,
    ) -> bool;

    /// Render `version` in the component's major version format
    fn format_major_version_format(&self, jira_component: &JiraComponent, version: &str)
    -> String;
}

pub struct TemplateVersionFormatter {
    version_names: VersionNames,
}

impl TemplateVersionFormatter {
    pub fn new(version_names: VersionNames) -> Self {
        Self { version_names }
    }

    pub fn version_names(&self) -> &VersionNames {
        &self.version_names
    }

    /// Replace the registry's named compound tokens with numeric ones
    fn expand(&self, template: &str) -> String {
        TOKEN
            .replace_all(template, |caps: &Captures| {
                let name = &caps[1];
                if NUMERIC_TOKENS.contains(&name) {
                    caps[0].to_string()
                } else if name == self.version_names.service_branch
                    || name == self.version_names.minor
                {
                    "$major.$minor".to_string()
                } else if name == self.version_names.service {
                    "$major.$minor.$service".to_string()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }

    /// Anchored regex accepting any version written in `template`
    fn pattern(&self, template: &str) -> Option<Regex> {
        let expanded = self.expand(template);
        let mut pattern = String::from("^");
        let mut last = 0;

        for caps in TOKEN.captures_iter(&expanded) {
            let token = caps.get(0)?;
            pattern.push_str(&regex::escape(&expanded[last..token.start()]));
            if NUMERIC_TOKENS.contains(&&caps[1]) {
                pattern.push_str(r"\d+");
            } else {
                pattern.push_str(&regex::escape(token.as_str()));
            }
            last = token.end();
        }

        pattern.push_str(&regex::escape(&expanded[last..]));
        pattern.push('$');
        Regex::new(&pattern).ok()
    }

    fn render(&self, template: &str, numbers: &[&str]) -> String {
        let expanded = self.expand(template);
        TOKEN
            .replace_all(&expanded, |caps: &Captures| {
                match NUMERIC_TOKENS.iter().position(|token| *token == &caps[1]) {
                    Some(index) => numbers.get(index).copied().unwrap_or("0").to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

fn strip_version_prefix<'a>(jira_component: &JiraComponent, version: &'a str) -> &'a str {
    let prefix = jira_component.component_info.version_prefix.as_str();
    if prefix.is_empty() {
        return version;
    }
    match version.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('-') => rest.trim_start_matches('-'),
        _ => version,
    }
}

impl VersionFormatter for TemplateVersionFormatter {
    fn matches_major_version_format(
        &self,
        jira_component_version: &JiraComponentVersion,
        version: &str,
    ) -> bool {
        let component = &jira_component_version.component;
        let template = &component.component_version_format.major_version_format;
        let version = strip_version_prefix(component, version);

        self.pattern(template)
            .is_some_and(|pattern| pattern.is_match(version))
    }

    fn format_major_version_format(
        &self,
        jira_component: &JiraComponent,
        version: &str,
    ) -> String {
        let numbers: Vec<&str> = NUMBER
            .find_iter(strip_version_prefix(jira_component, version))
            .map(|m| m.as_str())
            .collect();

        self.render(
            &jira_component.component_version_format.major_version_format,
            &numbers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentInfo, ComponentVersion, ComponentVersionFormat};
    use rstest::rstest;

    fn version_names() -> VersionNames {
        VersionNames {
            service_branch: "serviceCBranch".to_string(),
            service: "serviceC".to_string(),
            minor: "minorC".to_string(),
        }
    }

    fn jira_component(major_format: &str, prefix: &str) -> JiraComponent {
        JiraComponent {
            project_key: "APP".to_string(),
            display_name: None,
            component_version_format: ComponentVersionFormat {
                major_version_format: major_format.to_string(),
                release_version_format: "$major.$minor.$service".to_string(),
                build_version_format: "$major.$minor.$service.$fix".to_string(),
                line_version_format: "$major".to_string(),
            },
            component_info: ComponentInfo {
                version_prefix: prefix.to_string(),
                version_format: String::new(),
            },
            technical: false,
        }
    }

    fn jira_component_version(major_format: &str, prefix: &str) -> JiraComponentVersion {
        JiraComponentVersion {
            component_version: ComponentVersion::new("app", "1.2.3"),
            component: jira_component(major_format, prefix),
        }
    }

    #[rstest]
    #[case("$major.$minor", "", "1.2", true)]
    #[case("$major.$minor", "", "1.2.3", false)]
    #[case("$major.$minor", "", "1.x", false)]
    #[case("$major.$minor.$service", "", "10.20.30", true)]
    #[case("$major.$minor-hotfix", "", "1.2-hotfix", true)]
    #[case("$serviceCBranch", "", "3.4", true)]
    #[case("$serviceC", "", "3.4.5", true)]
    #[case("$minorC", "", "3.4.5", false)]
    #[case("$major.$minor", "app", "app-1.2", true)]
    #[case("$major.$minor", "app", "app1.2", false)]
    fn matches_major_version_format_returns_expected(
        #[case] major_format: &str,
        #[case] prefix: &str,
        #[case] version: &str,
        #[case] expected: bool,
    ) {
        let formatter = TemplateVersionFormatter::new(version_names());
        let jcv = jira_component_version(major_format, prefix);

        assert_eq!(
            formatter.matches_major_version_format(&jcv, version),
            expected
        );
    }

    #[rstest]
    #[case("$major.$minor", "", "1.2.3", "1.2")]
    #[case("$major.$minor", "", "1.2.3.4", "1.2")]
    #[case("$major.$minor.$service", "", "1.2", "1.2.0")]
    #[case("$major.$minor", "app", "app-7.8.9", "7.8")]
    #[case("$major.$minor", "v1", "v10-2.3", "10.2")]
    #[case("$serviceCBranch", "", "5.6.7", "5.6")]
    #[case("$major.$minor-LTS", "", "2.0.15", "2.0-LTS")]
    fn format_major_version_format_returns_expected(
        #[case] major_format: &str,
        #[case] prefix: &str,
        #[case] version: &str,
        #[case] expected: &str,
    ) {
        let formatter = TemplateVersionFormatter::new(version_names());
        let component = jira_component(major_format, prefix);

        assert_eq!(
            formatter.format_major_version_format(&component, version),
            expected
        );
    }
}
