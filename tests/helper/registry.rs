//! Registry test utilities

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use component_registry_cache::ComponentRegistryService;
use component_registry_cache::error::ClientError;
use component_registry_cache::registry::RegistryClient;
use component_registry_cache::registry::dto::{
    ComponentDto, ComponentsDto, DetailedComponentVersionDto, DetailedComponentVersionsDto,
    DistributionDto, JiraComponentVersionDto, JiraComponentVersionRangeDto, ServiceStatusDto,
    VcsSettingsDto, VersionNamesDto, VersionRequestDto,
};

/// In-memory registry counting the calls made to it
///
/// Unknown keys answer [`ClientError::NotFound`]; while marked unavailable
/// every call fails with [`ClientError::Timeout`].
pub struct FakeRegistryClient {
    components: HashMap<String, Value>,
    jira_versions: HashMap<(String, String), Value>,
    vcs_settings: HashMap<(String, String), Value>,
    detailed_versions: HashMap<(String, String), Value>,
    delay: Option<Duration>,
    unavailable: AtomicBool,
    cache_updated_at: Mutex<DateTime<Utc>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    bulk_requests: Mutex<Vec<VersionRequestDto>>,
}

impl FakeRegistryClient {
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            jira_versions: HashMap::new(),
            vcs_settings: HashMap::new(),
            detailed_versions: HashMap::new(),
            delay: None,
            unavailable: AtomicBool::new(false),
            cache_updated_at: Mutex::new(timestamp(0)),
            calls: Mutex::new(HashMap::new()),
            bulk_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_component(mut self, id: &str) -> Self {
        self.components.insert(
            id.to_string(),
            json!({
                "id": id,
                "name": id.to_uppercase(),
                "componentOwner": "owner",
                "distribution": { "explicit": true, "external": false, "gav": "org.example:app" },
                "releasesInDefaultBranch": true
            }),
        );
        self
    }

    /// Register a Jira version of `component` in `project_key`
    pub fn with_jira_version(
        mut self,
        project_key: &str,
        version: &str,
        component: &str,
        major_version_format: &str,
    ) -> Self {
        self.jira_versions.insert(
            (project_key.to_string(), version.to_string()),
            json!({
                "name": component,
                "version": version,
                "component": {
                    "projectKey": project_key,
                    "displayName": component.to_uppercase(),
                    "componentVersionFormat": {
                        "majorVersionFormat": major_version_format,
                        "releaseVersionFormat": "$major.$minor.$service"
                    }
                }
            }),
        );
        self
    }

    pub fn with_vcs_settings(mut self, component: &str, version: &str, tag: &str) -> Self {
        self.vcs_settings.insert(
            (component.to_string(), version.to_string()),
            json!({
                "versionControlSystemRoots": [{
                    "name": "main",
                    "type": "GIT",
                    "vcsPath": format!("ssh://git@example.com/{component}.git"),
                    "tag": tag,
                    "branch": "master"
                }]
            }),
        );
        self
    }

    pub fn with_detailed_version(mut self, component: &str, version: &str) -> Self {
        self.detailed_versions.insert(
            (component.to_string(), version.to_string()),
            json!({
                "component": component,
                "lineVersion": { "version": "1", "jiraVersion": "1" },
                "minorVersion": { "version": "1.2", "jiraVersion": "1.2" },
                "buildVersion": { "version": version, "jiraVersion": version },
                "rcVersion": { "version": format!("{version}_RC"), "jiraVersion": format!("{version}_RC") },
                "releaseVersion": { "version": version, "jiraVersion": version }
            }),
        );
        self
    }

    /// Make every call sleep first, widening the window for concurrent misses
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_cache_updated_at(&self, updated_at: DateTime<Utc>) {
        *self.cache_updated_at.lock().unwrap() = updated_at;
    }

    /// Number of calls made to the named client method
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    pub fn bulk_requests(&self) -> Vec<VersionRequestDto> {
        self.bulk_requests.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> Result<(), ClientError> {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ClientError::Timeout(method.to_string()));
        }
        Ok(())
    }
}

impl Default for FakeRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    value: Option<&Value>,
    key: String,
) -> Result<T, ClientError> {
    match value {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ClientError::InvalidResponse(e.to_string())),
        None => Err(ClientError::NotFound(key)),
    }
}

fn pair(first: &str, second: &str) -> (String, String) {
    (first.to_string(), second.to_string())
}

impl RegistryClient for FakeRegistryClient {
    fn get_all_components(&self) -> Result<ComponentsDto, ClientError> {
        self.record("get_all_components")?;
        let mut ids: Vec<&String> = self.components.keys().collect();
        ids.sort();
        let components = ids
            .into_iter()
            .map(|id| decode(self.components.get(id), id.clone()))
            .collect::<Result<Vec<ComponentDto>, _>>()?;
        Ok(ComponentsDto { components })
    }

    fn get_component(&self, component: &str) -> Result<ComponentDto, ClientError> {
        self.record("get_component")?;
        decode(self.components.get(component), component.to_string())
    }

    fn get_jira_component_by_project_and_version(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<JiraComponentVersionDto, ClientError> {
        self.record("get_jira_component_by_project_and_version")?;
        decode(
            self.jira_versions.get(&pair(project_key, version)),
            format!("{project_key}:{version}"),
        )
    }

    fn get_jira_components_by_project(
        &self,
        project_key: &str,
    ) -> Result<HashSet<String>, ClientError> {
        self.record("get_jira_components_by_project")?;
        let names: HashSet<String> = self
            .jira_versions
            .iter()
            .filter(|((key, _), _)| key == project_key)
            .filter_map(|(_, value)| value["name"].as_str().map(str::to_string))
            .collect();
        if names.is_empty() {
            return Err(ClientError::NotFound(project_key.to_string()));
        }
        Ok(names)
    }

    fn get_jira_component_version_ranges_by_project(
        &self,
        project_key: &str,
    ) -> Result<Vec<JiraComponentVersionRangeDto>, ClientError> {
        self.record("get_jira_component_version_ranges_by_project")?;
        Err(ClientError::NotFound(project_key.to_string()))
    }

    fn get_distribution_for_project(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<DistributionDto, ClientError> {
        self.record("get_distribution_for_project")?;
        let component = decode::<JiraComponentVersionDto>(
            self.jira_versions.get(&pair(project_key, version)),
            format!("{project_key}:{version}"),
        )?;
        decode(
            self.components
                .get(&component.name)
                .map(|value| &value["distribution"]),
            component.name,
        )
    }

    fn get_component_distribution(
        &self,
        component: &str,
        _version: &str,
    ) -> Result<DistributionDto, ClientError> {
        self.record("get_component_distribution")?;
        decode(
            self.components
                .get(component)
                .map(|value| &value["distribution"]),
            component.to_string(),
        )
    }

    fn get_vcs_settings_for_project(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<VcsSettingsDto, ClientError> {
        self.record("get_vcs_settings_for_project")?;
        let component = decode::<JiraComponentVersionDto>(
            self.jira_versions.get(&pair(project_key, version)),
            format!("{project_key}:{version}"),
        )?;
        decode(
            self.vcs_settings.get(&pair(&component.name, version)),
            format!("{}:{version}", component.name),
        )
    }

    fn get_vcs_settings(
        &self,
        component: &str,
        version: &str,
    ) -> Result<VcsSettingsDto, ClientError> {
        self.record("get_vcs_settings")?;
        decode(
            self.vcs_settings.get(&pair(component, version)),
            format!("{component}:{version}"),
        )
    }

    fn get_components_distribution_by_jira_project(
        &self,
        project_key: &str,
    ) -> Result<HashMap<String, DistributionDto>, ClientError> {
        self.record("get_components_distribution_by_jira_project")?;
        self.jira_versions
            .iter()
            .filter(|((key, _), _)| key == project_key)
            .filter_map(|(_, value)| value["name"].as_str())
            .map(|name| {
                decode(
                    self.components.get(name).map(|value| &value["distribution"]),
                    name.to_string(),
                )
                .map(|distribution| (name.to_string(), distribution))
            })
            .collect()
    }

    fn get_jira_component_for_component_and_version(
        &self,
        component: &str,
        version: &str,
    ) -> Result<JiraComponentVersionDto, ClientError> {
        self.record("get_jira_component_for_component_and_version")?;
        let found = self
            .jira_versions
            .values()
            .find(|value| value["name"] == component && value["version"] == version);
        decode(found, format!("{component}:{version}"))
    }

    fn get_all_jira_component_version_ranges(
        &self,
    ) -> Result<Vec<JiraComponentVersionRangeDto>, ClientError> {
        self.record("get_all_jira_component_version_ranges")?;
        Ok(Vec::new())
    }

    fn get_detailed_component_version(
        &self,
        component: &str,
        version: &str,
    ) -> Result<DetailedComponentVersionDto, ClientError> {
        self.record("get_detailed_component_version")?;
        decode(
            self.detailed_versions.get(&pair(component, version)),
            format!("{component}:{version}"),
        )
    }

    fn get_detailed_component_versions(
        &self,
        component: &str,
        request: &VersionRequestDto,
    ) -> Result<DetailedComponentVersionsDto, ClientError> {
        self.record("get_detailed_component_versions")?;
        self.bulk_requests.lock().unwrap().push(request.clone());
        let versions = request
            .versions
            .iter()
            .map(|version| {
                decode(
                    self.detailed_versions.get(&pair(component, version)),
                    format!("{component}:{version}"),
                )
                .map(|detailed| (version.clone(), detailed))
            })
            .collect::<Result<HashMap<String, DetailedComponentVersionDto>, _>>()?;
        Ok(DetailedComponentVersionsDto { versions })
    }

    fn get_version_names(&self) -> Result<VersionNamesDto, ClientError> {
        self.record("get_version_names")?;
        Ok(VersionNamesDto {
            service_branch: "serviceCBranch".to_string(),
            service: "serviceC".to_string(),
            minor: "minorC".to_string(),
        })
    }

    fn get_service_status(&self) -> Result<ServiceStatusDto, ClientError> {
        self.record("get_service_status")?;
        Ok(ServiceStatusDto {
            cache_updated_at: *self.cache_updated_at.lock().unwrap(),
        })
    }
}

/// Build a facade over `client`, keeping a handle to inspect its calls
pub fn create_test_service(
    client: FakeRegistryClient,
) -> (Arc<ComponentRegistryService>, Arc<FakeRegistryClient>) {
    let client = Arc::new(client);
    let service = Arc::new(ComponentRegistryService::new(client.clone()));
    (service, client)
}

pub fn timestamp(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
}
