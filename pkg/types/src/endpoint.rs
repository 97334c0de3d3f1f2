use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single backend address listed in a subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointAddress {
    pub ip: String,
    #[serde(default)]
    pub node_name: Option<String>,
}

/// A port shared by every address in a subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointPort {
    /// Port name; empty for an unnamed port.
    #[serde(default)]
    pub name: String,
    pub port: u16,
    #[serde(default = "default_protocol")]
    pub protocol: String,
}

fn default_protocol() -> String {
    "TCP".to_string()
}

/// One group of addresses exposing one shared port list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSubset {
    #[serde(default)]
    pub addresses: Vec<EndpointAddress>,
    #[serde(default)]
    pub ports: Vec<EndpointPort>,
}

/// Legacy Endpoints resource: one object per Service, grouping its backend
/// addresses into subsets. Superseded by EndpointSlice but still served by
/// every apiserver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub subsets: Vec<EndpointSubset>,
    pub created_at: DateTime<Utc>,
}
