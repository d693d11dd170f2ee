//! Caching facade over the components registry
//!
//! Every query is a lookup in its own cache; a miss runs the loader bound
//! to that cache (one registry call plus DTO mapping). The whole table is
//! cleared when the registry reports a new data generation, see
//! [`ComponentRegistryService::check_cache_actuality_and_clean`].

mod caches;
mod loaders;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::cache::{CacheId, CacheTable, InvalidationController};
use crate::error::RegistryError;
use crate::model::{
    Component, ComponentVersion, DetailedComponentVersion, DetailedComponentVersions,
    Distribution, JiraComponentVersion, JiraComponentVersionRange, JiraProjectVersion, JiraVersion,
    VcsSettings, VersionNames,
};
use crate::registry::client::RegistryClient;
use crate::registry::mapper;
use crate::version::formatter::{TemplateVersionFormatter, VersionFormatter};

use caches::{DetailedVersionsRequest, MinorVersionRequest, RegistryCaches};

pub struct ComponentRegistryService {
    client: Arc<dyn RegistryClient>,
    caches: RegistryCaches,
    invalidation: InvalidationController,
    version_names: OnceLock<VersionNames>,
    version_names_lock: Mutex<()>,
    formatter: OnceLock<Arc<dyn VersionFormatter>>,
    formatter_lock: Mutex<()>,
}

impl ComponentRegistryService {
    /// Create a facade whose formatter is built from the registry's
    /// version names on first use
    pub fn new(client: Arc<dyn RegistryClient>) -> Self {
        Self {
            client,
            caches: RegistryCaches::new(),
            invalidation: InvalidationController::new(),
            version_names: OnceLock::new(),
            version_names_lock: Mutex::new(()),
            formatter: OnceLock::new(),
            formatter_lock: Mutex::new(()),
        }
    }

    /// Create a facade using the given formatter instead of the template one
    pub fn with_formatter(
        client: Arc<dyn RegistryClient>,
        formatter: Arc<dyn VersionFormatter>,
    ) -> Self {
        let service = Self::new(client);
        let _ = service.formatter.set(formatter);
        service
    }

    pub(crate) fn client(&self) -> &dyn RegistryClient {
        self.client.as_ref()
    }

    pub fn get_all_components(&self) -> Result<Vec<Component>, RegistryError> {
        self.caches.all_components.get(self, &())
    }

    pub fn get_component(&self, component: &str) -> Result<Option<Component>, RegistryError> {
        self.caches.component.get(self, &component.to_string())
    }

    /// Whether the Jira version is written in its component's major
    /// version format; `false` when the registry does not know the version
    pub fn is_version_minor(&self, version: &JiraVersion) -> Result<bool, RegistryError> {
        self.caches.is_version_minor.get(self, version)
    }

    pub fn get_minor_version(
        &self,
        version: &JiraVersion,
    ) -> Result<Option<String>, RegistryError> {
        self.caches.minor_version_by_version.get(self, version)
    }

    /// Minor version line of `version_name` in the given Jira project
    pub fn get_minor_version_by_name(
        &self,
        version_name: &str,
        project_key: &str,
    ) -> Result<Option<String>, RegistryError> {
        let request = MinorVersionRequest {
            version_name: version_name.to_string(),
            project_key: project_key.to_string(),
        };
        self.caches.minor_version_by_name.get(self, &request)
    }

    pub fn get_jira_component_by_project_and_version(
        &self,
        project_version: &JiraProjectVersion,
    ) -> Result<Option<JiraComponentVersion>, RegistryError> {
        self.caches
            .jira_component_by_project_version
            .get(self, project_version)
    }

    /// Component names of a Jira project; empty for an unknown project
    pub fn get_jira_components_by_project(
        &self,
        project_key: &str,
    ) -> Result<HashSet<String>, RegistryError> {
        self.caches
            .jira_components_by_project
            .get(self, &project_key.to_string())
    }

    pub fn get_jira_component_version_ranges_by_project(
        &self,
        project_key: &str,
    ) -> Result<HashSet<JiraComponentVersionRange>, RegistryError> {
        self.caches
            .jira_component_version_ranges_by_project
            .get(self, &project_key.to_string())
    }

    pub fn component_exists_by_project_version(
        &self,
        project_version: &JiraProjectVersion,
    ) -> Result<bool, RegistryError> {
        self.caches
            .component_exists_by_project_version
            .get(self, project_version)
    }

    pub fn component_exists_by_project(&self, project_key: &str) -> Result<bool, RegistryError> {
        self.caches
            .component_exists_by_project
            .get(self, &project_key.to_string())
    }

    pub fn get_jira_component_by_component_version(
        &self,
        component_version: &ComponentVersion,
    ) -> Result<Option<JiraComponentVersion>, RegistryError> {
        self.caches
            .jira_component_by_component_version
            .get(self, component_version)
    }

    pub fn get_distribution_by_project_version(
        &self,
        project_version: &JiraProjectVersion,
    ) -> Result<Option<Distribution>, RegistryError> {
        self.caches
            .distribution_by_project_version
            .get(self, project_version)
    }

    pub fn get_distribution_by_component_version(
        &self,
        component_version: &ComponentVersion,
    ) -> Result<Option<Distribution>, RegistryError> {
        self.caches
            .distribution_by_component_version
            .get(self, component_version)
    }

    pub fn get_vcs_settings_by_project_version(
        &self,
        project_version: &JiraProjectVersion,
    ) -> Result<Option<VcsSettings>, RegistryError> {
        self.caches
            .vcs_settings_by_project_version
            .get(self, project_version)
    }

    pub fn get_vcs_settings_by_component_version(
        &self,
        component_version: &ComponentVersion,
    ) -> Result<Option<VcsSettings>, RegistryError> {
        self.caches
            .vcs_settings_by_component_version
            .get(self, component_version)
    }

    /// Distribution of every component of a Jira project, by component name
    pub fn get_components_distribution_by_jira_project(
        &self,
        project_key: &str,
    ) -> Result<HashMap<String, Distribution>, RegistryError> {
        self.caches
            .distribution_by_project
            .get(self, &project_key.to_string())
    }

    pub fn get_all_jira_component_version_ranges(
        &self,
    ) -> Result<HashSet<JiraComponentVersionRange>, RegistryError> {
        self.caches.all_jira_component_version_ranges.get(self, &())
    }

    /// Line, minor, build, RC and release versions of a component version
    ///
    /// Unlike the other lookups, a version unknown to the registry is an
    /// error here.
    pub fn get_detailed_component_version(
        &self,
        component_version: &ComponentVersion,
    ) -> Result<DetailedComponentVersion, RegistryError> {
        self.caches
            .detailed_component_version
            .get(self, component_version)
    }

    /// Bulk form of [`Self::get_detailed_component_version`]
    ///
    /// The order of `versions` does not matter: the same set always maps to
    /// the same cache entry.
    pub fn get_detailed_component_versions<I, S>(
        &self,
        component: &str,
        versions: I,
    ) -> Result<DetailedComponentVersions, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = DetailedVersionsRequest {
            component: component.to_string(),
            versions: versions.into_iter().map(Into::into).collect(),
        };
        self.caches.detailed_component_versions.get(self, &request)
    }

    /// Version naming configuration, fetched once per process
    pub fn get_version_names(&self) -> Result<&VersionNames, RegistryError> {
        if let Some(version_names) = self.version_names.get() {
            return Ok(version_names);
        }

        let _guard = self
            .version_names_lock
            .lock()
            .map_err(|_| RegistryError::LockPoisoned)?;
        if let Some(version_names) = self.version_names.get() {
            return Ok(version_names);
        }

        let version_names = mapper::version_names(self.client.get_version_names()?);
        info!("Loaded version names: {:?}", version_names);
        Ok(self.version_names.get_or_init(|| version_names))
    }

    /// Shared formatter, built from the version names on first use
    pub fn get_component_version_formatter(
        &self,
    ) -> Result<Arc<dyn VersionFormatter>, RegistryError> {
        if let Some(formatter) = self.formatter.get() {
            return Ok(Arc::clone(formatter));
        }

        let version_names = self.get_version_names()?.clone();

        let _guard = self
            .formatter_lock
            .lock()
            .map_err(|_| RegistryError::LockPoisoned)?;
        let formatter = self.formatter.get_or_init(|| {
            Arc::new(TemplateVersionFormatter::new(version_names)) as Arc<dyn VersionFormatter>
        });
        Ok(Arc::clone(formatter))
    }

    /// Clear every cache if forced or if the registry's data changed since
    /// the last check
    ///
    /// Meant to be called periodically by the host and on administrative
    /// request. Returns whether the caches were cleared.
    pub fn check_cache_actuality_and_clean(&self, force: bool) -> Result<bool, RegistryError> {
        self.invalidation
            .check_and_clean(self.client.as_ref(), &self.caches, force)
    }

    pub fn clear_cache(&self, id: CacheId) {
        self.caches.clear(id);
    }

    /// Registry data generation the caches currently reflect
    pub fn cache_watermark(&self) -> Result<DateTime<Utc>, RegistryError> {
        self.invalidation.watermark()
    }
}
