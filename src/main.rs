use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use component_registry_cache::config::{self, ServiceConfig};
use component_registry_cache::model::{ComponentVersion, JiraProjectVersion, JiraVersion};
use component_registry_cache::{ComponentRegistryService, HttpRegistryClient, logging};

#[derive(Parser)]
#[command(name = "component-registry-cache")]
#[command(version, about = "Cached queries against the components registry")]
struct Cli {
    /// Path to the config file (defaults to config.json in the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every component
    Components,
    /// Show one component
    Component { id: String },
    /// Resolve the Jira component of a project version
    JiraComponent { project: String, version: String },
    /// Show the minor version line of a project version
    Minor { project: String, version: String },
    /// Show the VCS settings of a component version
    Vcs { component: String, version: String },
    /// Show the detailed versions of a component
    Detailed {
        component: String,
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Clear the caches if the registry data changed
    Check {
        /// Clear even if the registry data did not change
        #[arg(long)]
        force: bool,
    },
    /// Run the invalidation check periodically
    Watch,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ServiceConfig::load(cli.config.as_deref())?;
    let _guard = logging::init(&config::log_dir(), config.log.json)?;

    let client = HttpRegistryClient::new(&config.registry)?;
    let service = ComponentRegistryService::new(Arc::new(client));

    match cli.command {
        Command::Components => print(&service.get_all_components()?),
        Command::Component { id } => print(&service.get_component(&id)?),
        Command::JiraComponent { project, version } => print(
            &service
                .get_jira_component_by_project_and_version(&JiraProjectVersion::new(
                    &project, &version,
                ))?,
        ),
        Command::Minor { project, version } => {
            print(&service.get_minor_version(&JiraVersion::new(&project, &version))?)
        }
        Command::Vcs { component, version } => print(
            &service.get_vcs_settings_by_component_version(&ComponentVersion::new(
                &component, &version,
            ))?,
        ),
        Command::Detailed {
            component,
            versions,
        } => print(&service.get_detailed_component_versions(&component, versions)?),
        Command::Check { force } => {
            let cleared = service.check_cache_actuality_and_clean(force)?;
            print(&json!({ "cleared": cleared }))
        }
        Command::Watch => watch(
            &service,
            Duration::from_secs(config.invalidation.interval_secs),
        ),
    }
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn watch(service: &ComponentRegistryService, interval: Duration) -> anyhow::Result<()> {
    info!("Checking registry caches every {:?}", interval);
    loop {
        match service.check_cache_actuality_and_clean(false) {
            Ok(true) => info!("Registry caches cleared"),
            Ok(false) => {}
            Err(e) => error!("Registry cache check failed: {}", e),
        }
        std::thread::sleep(interval);
    }
}
