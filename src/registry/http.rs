//! Components registry REST client

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::error::ClientError;
use crate::registry::client::RegistryClient;
use crate::registry::dto::{
    ComponentDto, ComponentsDto, DetailedComponentVersionDto, DetailedComponentVersionsDto,
    DistributionDto, JiraComponentVersionDto, JiraComponentVersionRangeDto, ServiceStatusDto,
    VcsSettingsDto, VersionNamesDto, VersionRequestDto,
};

/// Path prefix of every registry endpoint
const API_PREFIX: &[&str] = &["rest", "api", "2"];

/// Blocking HTTP implementation of [`RegistryClient`]
pub struct HttpRegistryClient {
    client: Client,
    base_url: Url,
}

impl HttpRegistryClient {
    pub fn new(config: &RegistryConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.url.clone()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build an endpoint URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(API_PREFIX.iter().chain(segments));
        }
        url
    }

    fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.endpoint(segments);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| transport_error(e, &url))?;

        decode(response, &url)
    }

    fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(segments);
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .map_err(|e| transport_error(e, &url))?;

        decode(response, &url)
    }
}

fn transport_error(error: reqwest::Error, url: &Url) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(url.to_string())
    } else {
        ClientError::Network(error)
    }
}

fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, ClientError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(url.to_string()));
    }

    if !status.is_success() {
        warn!("Components registry returned status {}: {}", status, url);
        return Err(ClientError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    // A failure while reading the body is a transport failure, only a body
    // that arrived in full can be invalid
    let body = response.bytes().map_err(|e| transport_error(e, url))?;

    serde_json::from_slice(&body).map_err(|e| {
        warn!("Failed to parse components registry response from {}: {}", url, e);
        ClientError::InvalidResponse(e.to_string())
    })
}

impl RegistryClient for HttpRegistryClient {
    fn get_all_components(&self) -> Result<ComponentsDto, ClientError> {
        self.get(&["components"])
    }

    fn get_component(&self, component: &str) -> Result<ComponentDto, ClientError> {
        self.get(&["components", component])
    }

    fn get_jira_component_by_project_and_version(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<JiraComponentVersionDto, ClientError> {
        self.get(&["projects", project_key, "versions", version, "jira-component"])
    }

    fn get_jira_components_by_project(
        &self,
        project_key: &str,
    ) -> Result<HashSet<String>, ClientError> {
        self.get(&["projects", project_key, "jira-components"])
    }

    fn get_jira_component_version_ranges_by_project(
        &self,
        project_key: &str,
    ) -> Result<Vec<JiraComponentVersionRangeDto>, ClientError> {
        self.get(&["projects", project_key, "jira-component-version-ranges"])
    }

    fn get_distribution_for_project(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<DistributionDto, ClientError> {
        self.get(&["projects", project_key, "versions", version, "distribution"])
    }

    fn get_component_distribution(
        &self,
        component: &str,
        version: &str,
    ) -> Result<DistributionDto, ClientError> {
        self.get(&["components", component, "versions", version, "distribution"])
    }

    fn get_vcs_settings_for_project(
        &self,
        project_key: &str,
        version: &str,
    ) -> Result<VcsSettingsDto, ClientError> {
        self.get(&["projects", project_key, "versions", version, "vcs-settings"])
    }

    fn get_vcs_settings(
        &self,
        component: &str,
        version: &str,
    ) -> Result<VcsSettingsDto, ClientError> {
        self.get(&["components", component, "versions", version, "vcs-settings"])
    }

    fn get_components_distribution_by_jira_project(
        &self,
        project_key: &str,
    ) -> Result<HashMap<String, DistributionDto>, ClientError> {
        self.get(&["projects", project_key, "components-distribution"])
    }

    fn get_jira_component_for_component_and_version(
        &self,
        component: &str,
        version: &str,
    ) -> Result<JiraComponentVersionDto, ClientError> {
        self.get(&["components", component, "versions", version, "jira-component"])
    }

    fn get_all_jira_component_version_ranges(
        &self,
    ) -> Result<Vec<JiraComponentVersionRangeDto>, ClientError> {
        self.get(&["common", "jira-component-version-ranges"])
    }

    fn get_detailed_component_version(
        &self,
        component: &str,
        version: &str,
    ) -> Result<DetailedComponentVersionDto, ClientError> {
        self.get(&["components", component, "versions", version, "detailed-version"])
    }

    fn get_detailed_component_versions(
        &self,
        component: &str,
        request: &VersionRequestDto,
    ) -> Result<DetailedComponentVersionsDto, ClientError> {
        self.post(&["components", component, "detailed-versions"], request)
    }

    fn get_version_names(&self) -> Result<VersionNamesDto, ClientError> {
        self.get(&["common", "version-names"])
    }

    fn get_service_status(&self) -> Result<ServiceStatusDto, ClientError> {
        self.get(&["service", "status"])
    }
}
