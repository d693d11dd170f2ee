use serde::Serialize;

/// A component registered in the components registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: Option<String>,
    pub component_owner: Option<String>,
    pub release_manager: Option<String>,
    pub distribution: Option<Distribution>,
    pub archived: bool,
    pub releases_in_default_branch: Option<bool>,
}

/// How a component version is published
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub explicit: bool,
    pub external: bool,
    /// Maven-style coordinates; empty when the registry has none
    pub gav: String,
}

impl Distribution {
    pub fn has_gav(&self) -> bool {
        !self.gav.is_empty()
    }
}
