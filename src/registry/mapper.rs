//! DTO to domain model translation
//!
//! Pure functions with a few fixed coercions: a missing distribution
//! coordinate becomes an empty string, repository types map by name, and
//! missing build/line formats fall back to the release/major formats.

use crate::model::{
    Component, ComponentInfo, ComponentRegistryVersion, ComponentVersion, ComponentVersionFormat,
    DetailedComponentVersion, DetailedComponentVersions, Distribution, JiraComponent,
    JiraComponentVersion, JiraComponentVersionRange, RepositoryType, VcsSettings,
    VersionControlSystemRoot, VersionNames,
};
use crate::registry::dto::{
    ComponentDto, ComponentInfoDto, ComponentRegistryVersionDto, ComponentVersionFormatDto,
    DetailedComponentVersionDto, DetailedComponentVersionsDto, DistributionDto, JiraComponentDto,
    JiraComponentVersionDto, JiraComponentVersionRangeDto, RepositoryTypeDto, VcsSettingsDto,
    VersionControlSystemRootDto, VersionNamesDto,
};

pub fn component(dto: ComponentDto) -> Component {
    Component {
        id: dto.id,
        name: dto.name,
        component_owner: dto.component_owner,
        release_manager: dto.release_manager,
        distribution: dto.distribution.map(distribution),
        archived: dto.archived,
        releases_in_default_branch: dto.releases_in_default_branch,
    }
}

pub fn distribution(dto: DistributionDto) -> Distribution {
    Distribution {
        explicit: dto.explicit,
        external: dto.external,
        gav: dto.gav.unwrap_or_default(),
    }
}

pub fn repository_type(dto: RepositoryTypeDto) -> RepositoryType {
    match dto {
        RepositoryTypeDto::Cvs => RepositoryType::Cvs,
        RepositoryTypeDto::Mercurial => RepositoryType::Mercurial,
        RepositoryTypeDto::Git => RepositoryType::Git,
    }
}

pub fn vcs_root(dto: VersionControlSystemRootDto) -> VersionControlSystemRoot {
    VersionControlSystemRoot {
        name: dto.name,
        repository_type: repository_type(dto.repository_type),
        vcs_path: dto.vcs_path,
        tag: dto.tag,
        branch: dto.branch,
        hotfix_branch: dto.hotfix_branch,
    }
}

pub fn vcs_settings(dto: VcsSettingsDto) -> VcsSettings {
    VcsSettings {
        external_registry: dto.external_registry,
        version_control_system_roots: dto
            .version_control_system_roots
            .into_iter()
            .map(vcs_root)
            .collect(),
    }
}

pub fn component_version_format(dto: ComponentVersionFormatDto) -> ComponentVersionFormat {
    let build_version_format = dto
        .build_version_format
        .unwrap_or_else(|| dto.release_version_format.clone());
    let line_version_format = dto
        .line_version_format
        .unwrap_or_else(|| dto.major_version_format.clone());

    ComponentVersionFormat {
        major_version_format: dto.major_version_format,
        release_version_format: dto.release_version_format,
        build_version_format,
        line_version_format,
    }
}

pub fn component_info(dto: ComponentInfoDto) -> ComponentInfo {
    ComponentInfo {
        version_prefix: dto.version_prefix,
        version_format: dto.version_format,
    }
}

pub fn jira_component(dto: JiraComponentDto) -> JiraComponent {
    JiraComponent {
        project_key: dto.project_key,
        display_name: dto.display_name,
        component_version_format: component_version_format(dto.component_version_format),
        component_info: component_info(dto.component_info),
        technical: dto.technical,
    }
}

pub fn jira_component_version(dto: JiraComponentVersionDto) -> JiraComponentVersion {
    JiraComponentVersion {
        component_version: ComponentVersion {
            component_name: dto.name,
            version: dto.version,
        },
        component: jira_component(dto.component),
    }
}

pub fn jira_component_version_range(
    dto: JiraComponentVersionRangeDto,
) -> JiraComponentVersionRange {
    JiraComponentVersionRange {
        component_name: dto.component_name,
        version_range: dto.version_range,
        jira_component: jira_component(dto.component),
        distribution: distribution(dto.distribution),
        vcs_settings: vcs_settings(dto.vcs_settings),
    }
}

pub fn version_names(dto: VersionNamesDto) -> VersionNames {
    VersionNames {
        service_branch: dto.service_branch,
        service: dto.service,
        minor: dto.minor,
    }
}

fn component_registry_version(dto: ComponentRegistryVersionDto) -> ComponentRegistryVersion {
    ComponentRegistryVersion {
        version: dto.version,
        jira_version: dto.jira_version,
    }
}

pub fn detailed_component_version(dto: DetailedComponentVersionDto) -> DetailedComponentVersion {
    DetailedComponentVersion {
        component: dto.component,
        line_version: component_registry_version(dto.line_version),
        minor_version: component_registry_version(dto.minor_version),
        build_version: component_registry_version(dto.build_version),
        rc_version: component_registry_version(dto.rc_version),
        release_version: component_registry_version(dto.release_version),
    }
}

pub fn detailed_component_versions(dto: DetailedComponentVersionsDto) -> DetailedComponentVersions {
    DetailedComponentVersions {
        versions: dto
            .versions
            .into_iter()
            .map(|(version, detailed)| (version, detailed_component_version(detailed)))
            .collect(),
    }
}
