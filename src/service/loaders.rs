//! Loaders bound to the facade's caches
//!
//! Each loader performs one registry call and maps the result. Coercion of a
//! "no data" answer to an empty value happens only through [`attempt`].

use std::collections::{HashMap, HashSet};

use tracing::{debug, error};

use crate::cache::CacheId;
use crate::error::{ClientError, RegistryError};
use crate::model::{
    Component, ComponentVersion, DetailedComponentVersion, DetailedComponentVersions,
    Distribution, JiraComponentVersion, JiraComponentVersionRange, JiraProjectVersion, JiraVersion,
    VcsSettings,
};
use crate::registry::dto::VersionRequestDto;
use crate::registry::mapper;
use crate::service::ComponentRegistryService;
use crate::service::caches::{DetailedVersionsRequest, MinorVersionRequest};

/// Run a registry call, turning any non-transport failure into `None`
///
/// Transport failures are returned as [`RegistryError::Unavailable`] and are
/// therefore never cached.
pub(crate) fn attempt<T>(
    cache: CacheId,
    body: impl FnOnce() -> Result<T, ClientError>,
) -> Result<Option<T>, RegistryError> {
    match body() {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_transport() => Err(e.into()),
        Err(e) => {
            debug!("{} lookup returned no data: {}", cache, e);
            Ok(None)
        }
    }
}

pub(super) fn all_components(
    service: &ComponentRegistryService,
    _: &(),
) -> Result<Vec<Component>, RegistryError> {
    let components = service.client().get_all_components()?;
    Ok(components
        .components
        .into_iter()
        .map(mapper::component)
        .collect())
}

pub(super) fn component(
    service: &ComponentRegistryService,
    component: &String,
) -> Result<Option<Component>, RegistryError> {
    attempt(CacheId::Component, || {
        service
            .client()
            .get_component(component)
            .map(mapper::component)
    })
}

pub(super) fn is_version_minor(
    service: &ComponentRegistryService,
    version: &JiraVersion,
) -> Result<bool, RegistryError> {
    let Some(jira_component_version) =
        service.get_jira_component_by_project_and_version(&version.project_version())?
    else {
        error!(
            "Version {}:{} is not found in components registry",
            version.project_key, version.name
        );
        return Ok(false);
    };

    let formatter = service.get_component_version_formatter()?;
    Ok(formatter.matches_major_version_format(&jira_component_version, &version.name))
}

pub(super) fn minor_version_by_version(
    service: &ComponentRegistryService,
    version: &JiraVersion,
) -> Result<Option<String>, RegistryError> {
    service.get_minor_version_by_name(&version.name, &version.project_key)
}

pub(super) fn minor_version_by_name(
    service: &ComponentRegistryService,
    request: &MinorVersionRequest,
) -> Result<Option<String>, RegistryError> {
    let project_version = JiraProjectVersion::new(&request.project_key, &request.version_name);
    let Some(jira_component_version) =
        service.get_jira_component_by_project_and_version(&project_version)?
    else {
        return Ok(None);
    };

    let formatter = service.get_component_version_formatter()?;
    Ok(Some(formatter.format_major_version_format(
        &jira_component_version.component,
        &request.version_name,
    )))
}

pub(super) fn jira_component_by_project_version(
    service: &ComponentRegistryService,
    key: &JiraProjectVersion,
) -> Result<Option<JiraComponentVersion>, RegistryError> {
    attempt(CacheId::JiraComponentByProjectVersion, || {
        service
            .client()
            .get_jira_component_by_project_and_version(&key.project_key, &key.version)
            .map(mapper::jira_component_version)
    })
}

pub(super) fn jira_components_by_project(
    service: &ComponentRegistryService,
    project_key: &String,
) -> Result<HashSet<String>, RegistryError> {
    attempt(CacheId::JiraComponentsByProjectKey, || {
        service.client().get_jira_components_by_project(project_key)
    })
    .map(Option::unwrap_or_default)
}

pub(super) fn jira_component_version_ranges_by_project(
    service: &ComponentRegistryService,
    project_key: &String,
) -> Result<HashSet<JiraComponentVersionRange>, RegistryError> {
    attempt(CacheId::JiraComponentVersionRangesByProjectKey, || {
        service
            .client()
            .get_jira_component_version_ranges_by_project(project_key)
            .map(|ranges| {
                ranges
                    .into_iter()
                    .map(mapper::jira_component_version_range)
                    .collect::<HashSet<_>>()
            })
    })
    .map(Option::unwrap_or_default)
}

pub(super) fn distribution_by_project_version(
    service: &ComponentRegistryService,
    key: &JiraProjectVersion,
) -> Result<Option<Distribution>, RegistryError> {
    attempt(CacheId::DistributionByJiraProjectVersion, || {
        service
            .client()
            .get_distribution_for_project(&key.project_key, &key.version)
            .map(mapper::distribution)
    })
}

pub(super) fn distribution_by_component_version(
    service: &ComponentRegistryService,
    key: &ComponentVersion,
) -> Result<Option<Distribution>, RegistryError> {
    attempt(CacheId::DistributionByComponentVersion, || {
        service
            .client()
            .get_component_distribution(&key.component_name, &key.version)
            .map(mapper::distribution)
    })
}

pub(super) fn vcs_settings_by_project_version(
    service: &ComponentRegistryService,
    key: &JiraProjectVersion,
) -> Result<Option<VcsSettings>, RegistryError> {
    attempt(CacheId::VcsSettingsByJiraProjectVersion, || {
        service
            .client()
            .get_vcs_settings_for_project(&key.project_key, &key.version)
            .map(mapper::vcs_settings)
    })
}

pub(super) fn vcs_settings_by_component_version(
    service: &ComponentRegistryService,
    key: &ComponentVersion,
) -> Result<Option<VcsSettings>, RegistryError> {
    attempt(CacheId::VcsSettingsByComponentVersion, || {
        service
            .client()
            .get_vcs_settings(&key.component_name, &key.version)
            .map(mapper::vcs_settings)
    })
}

pub(super) fn distribution_by_project(
    service: &ComponentRegistryService,
    project_key: &String,
) -> Result<HashMap<String, Distribution>, RegistryError> {
    attempt(CacheId::DistributionByProjectKey, || {
        service
            .client()
            .get_components_distribution_by_jira_project(project_key)
            .map(|distributions| {
                distributions
                    .into_iter()
                    .map(|(component, dto)| (component, mapper::distribution(dto)))
                    .collect::<HashMap<_, _>>()
            })
    })
    .map(Option::unwrap_or_default)
}

// Any non-transport failure counts as "does not exist"
pub(super) fn component_exists_by_project_version(
    service: &ComponentRegistryService,
    key: &JiraProjectVersion,
) -> Result<bool, RegistryError> {
    attempt(CacheId::IsComponentExistsByProjectVersion, || {
        service
            .client()
            .get_jira_component_by_project_and_version(&key.project_key, &key.version)
            .map(|_| true)
    })
    .map(|exists| exists.unwrap_or(false))
}

pub(super) fn component_exists_by_project(
    service: &ComponentRegistryService,
    project_key: &String,
) -> Result<bool, RegistryError> {
    attempt(CacheId::IsComponentExistsByProjectKey, || {
        service
            .client()
            .get_jira_components_by_project(project_key)
            .map(|components| !components.is_empty())
    })
    .map(|exists| exists.unwrap_or(false))
}

pub(super) fn jira_component_by_component_version(
    service: &ComponentRegistryService,
    key: &ComponentVersion,
) -> Result<Option<JiraComponentVersion>, RegistryError> {
    attempt(CacheId::JiraComponentByComponentVersion, || {
        service
            .client()
            .get_jira_component_for_component_and_version(&key.component_name, &key.version)
            .map(mapper::jira_component_version)
    })
}

pub(super) fn all_jira_component_version_ranges(
    service: &ComponentRegistryService,
    _: &(),
) -> Result<HashSet<JiraComponentVersionRange>, RegistryError> {
    attempt(CacheId::AllJiraComponentVersionRanges, || {
        service
            .client()
            .get_all_jira_component_version_ranges()
            .map(|ranges| {
                ranges
                    .into_iter()
                    .map(mapper::jira_component_version_range)
                    .collect::<HashSet<_>>()
            })
    })
    .map(Option::unwrap_or_default)
}

pub(super) fn detailed_component_version(
    service: &ComponentRegistryService,
    key: &ComponentVersion,
) -> Result<DetailedComponentVersion, RegistryError> {
    let detailed = service
        .client()
        .get_detailed_component_version(&key.component_name, &key.version)?;
    Ok(mapper::detailed_component_version(detailed))
}

pub(super) fn detailed_component_versions(
    service: &ComponentRegistryService,
    request: &DetailedVersionsRequest,
) -> Result<DetailedComponentVersions, RegistryError> {
    let body = VersionRequestDto {
        versions: request.versions.iter().cloned().collect(),
    };
    let detailed = service
        .client()
        .get_detailed_component_versions(&request.component, &body)?;
    Ok(mapper::detailed_component_versions(detailed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_wraps_success() {
        let result = attempt(CacheId::Component, || Ok::<_, ClientError>(42));
        assert_eq!(result.unwrap(), Some(42));
    }

    #[test]
    fn attempt_coerces_logical_failures_to_none() {
        let not_found = attempt(CacheId::Component, || {
            Err::<u32, _>(ClientError::NotFound("app".to_string()))
        });
        assert_eq!(not_found.unwrap(), None);

        let status = attempt(CacheId::Component, || {
            Err::<u32, _>(ClientError::Status {
                status: 502,
                url: "components/app".to_string(),
            })
        });
        assert_eq!(status.unwrap(), None);
    }

    #[test]
    fn attempt_propagates_transport_failures() {
        let result = attempt(CacheId::Component, || {
            Err::<u32, _>(ClientError::Timeout("components/app".to_string()))
        });
        assert!(matches!(result, Err(RegistryError::Unavailable(_))));
    }
}
