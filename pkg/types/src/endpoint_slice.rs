use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label naming the Service that owns an EndpointSlice. Slices are
/// many-to-one with Services, so the slice's own name is not an identity.
pub const LABEL_SERVICE_NAME: &str = "kubernetes.io/service-name";

/// Topology key carrying the hostname of the node backing an endpoint.
pub const TOPOLOGY_HOSTNAME: &str = "kubernetes.io/hostname";

/// Readiness reported for a slice endpoint. A missing `ready` means the
/// managing system did not report a state; consumers treat that as ready.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConditions {
    #[serde(default)]
    pub ready: Option<bool>,
}

/// One endpoint entry in a slice: a set of addresses sharing readiness and
/// topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceEndpoint {
    pub addresses: Vec<String>,
    #[serde(default)]
    pub conditions: EndpointConditions,
    #[serde(default)]
    pub topology: HashMap<String, String>,
}

/// A port served by every endpoint in a slice. All fields are optional on
/// the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlicePort {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub protocol: Option<String>,
}

/// EndpointSlice resource: a flat list of endpoint entries plus the named
/// ports they serve. A Service may own any number of slices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSlice {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub endpoints: Vec<SliceEndpoint>,
    #[serde(default)]
    pub ports: Vec<SlicePort>,
    pub created_at: DateTime<Utc>,
}
