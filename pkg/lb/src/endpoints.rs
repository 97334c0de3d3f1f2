use std::collections::HashMap;
use std::net::IpAddr;

use anyhow::bail;
use ipnet::IpNet;
use serde::{Deserialize, Serialize};

use crate::l4::PortConfiguration;

/// Identity of the Service owning a backend set, unique across the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceID {
    pub name: String,
    pub namespace: String,
}

impl std::fmt::Display for ServiceID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Everything known about one backend address: the ports it serves and,
/// when known, the node hosting it. The port names must match the frontend
/// port names of the owning Service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    pub ports: PortConfiguration,
    /// Name of the node hosting this backend; empty when unknown.
    #[serde(default)]
    pub node_name: String,
}

/// The full backend set for one Service, keyed by backend IP literal.
///
/// Built fresh on every parse: a watch event replaces the previous set in
/// the service map wholesale rather than mutating it. Equality is
/// structural, so the service map can compare old and new sets to detect
/// no-op updates regardless of construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub backends: HashMap<String, Backend>,
}

impl Endpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project every backend address to a host prefix (`/32` or `/128`),
    /// for IP-based policy selectors.
    ///
    /// All-or-nothing: if any backend key fails address parsing, returns an
    /// error naming every offending address and no prefixes. The order of
    /// returned prefixes is unspecified.
    pub fn cidr_prefixes(&self) -> anyhow::Result<Vec<IpNet>> {
        let mut valid = Vec::with_capacity(self.backends.len());
        let mut invalid = Vec::new();
        for addr in self.backends.keys() {
            match addr.parse::<IpAddr>() {
                Ok(ip) => valid.push(IpNet::from(ip)),
                Err(_) => invalid.push(addr.as_str()),
            }
        }
        if !invalid.is_empty() {
            invalid.sort_unstable();
            bail!("invalid IPs specified as backends: {:?}", invalid);
        }
        Ok(valid)
    }
}

impl std::fmt::Display for Endpoints {
    /// Renders a sorted, comma-joined list of `host:port/protocol` tokens,
    /// one per (address, port) pair. IPv6 hosts are bracketed. Sorting is
    /// over the fully rendered token, so output is stable for diffs and
    /// logs no matter the map iteration order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens = Vec::new();
        for (addr, backend) in &self.backends {
            for l4 in backend.ports.values() {
                if addr.contains(':') {
                    tokens.push(format!("[{}]:{}/{}", addr, l4.port, l4.proto));
                } else {
                    tokens.push(format!("{}:{}/{}", addr, l4.port, l4.proto));
                }
            }
        }
        tokens.sort_unstable();
        write!(f, "{}", tokens.join(","))
    }
}

/// Backend sets learned from remote clusters, keyed by remote cluster name.
/// Maintained by the multi-cluster layer; the parsers here never touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEndpoints {
    pub endpoints: HashMap<String, Endpoints>,
}

impl ExternalEndpoints {
    pub fn new() -> Self {
        Self::default()
    }
}
