use std::collections::hash_map::Entry;

use pkg_types::endpoint::Endpoints as EndpointsResource;
use pkg_types::endpoint_slice::{EndpointSlice, LABEL_SERVICE_NAME, SlicePort, TOPOLOGY_HOSTNAME};

use crate::endpoints::{Backend, Endpoints, ServiceID};
use crate::l4::{L4Addr, L4Proto};

/// Identity of the Service owning a legacy Endpoints resource: the
/// resource's own name and namespace.
pub fn parse_endpoints_id(ep: &EndpointsResource) -> ServiceID {
    ServiceID {
        name: ep.name.clone(),
        namespace: ep.namespace.clone(),
    }
}

/// Normalize a legacy Endpoints resource into a backend set.
///
/// Every listed address is eligible, since the legacy schema carries no
/// readiness signal. Later subsets overwrite same-named ports and node
/// names for an address they share with an earlier subset.
pub fn parse_endpoints(ep: &EndpointsResource) -> (ServiceID, Endpoints) {
    let mut endpoints = Endpoints::new();

    for subset in &ep.subsets {
        for addr in &subset.addresses {
            let backend = endpoints.backends.entry(addr.ip.clone()).or_default();

            if let Some(node_name) = &addr.node_name {
                backend.node_name = node_name.clone();
            }

            for port in &subset.ports {
                if let Some(proto) = L4Proto::parse(&port.protocol) {
                    backend
                        .ports
                        .insert(port.name.clone(), L4Addr::new(proto, port.port));
                }
            }
        }
    }

    (parse_endpoints_id(ep), endpoints)
}

/// Identity of the Service owning a slice: the namespace plus the
/// `kubernetes.io/service-name` label. The slice's own name is never the
/// identity, since a Service may own many slices.
pub fn parse_endpoint_slice_id(ep: &EndpointSlice) -> ServiceID {
    ServiceID {
        name: ep
            .labels
            .get(LABEL_SERVICE_NAME)
            .cloned()
            .unwrap_or_default(),
        namespace: ep.namespace.clone(),
    }
}

/// Normalize an EndpointSlice resource into a backend set.
///
/// An entry is skipped iff its readiness condition is explicitly false; an
/// absent condition counts as ready. The node name is taken from the
/// hostname topology key when the backend is first created and is never
/// overwritten by later entries for the same address.
pub fn parse_endpoint_slice(ep: &EndpointSlice) -> (ServiceID, Endpoints) {
    let mut endpoints = Endpoints::new();

    for entry in &ep.endpoints {
        if entry.conditions.ready == Some(false) {
            continue;
        }
        for addr in &entry.addresses {
            let backend = match endpoints.backends.entry(addr.clone()) {
                Entry::Occupied(occupied) => occupied.into_mut(),
                Entry::Vacant(vacant) => {
                    let mut backend = Backend::default();
                    if let Some(node_name) = entry.topology.get(TOPOLOGY_HOSTNAME) {
                        backend.node_name = node_name.clone();
                    }
                    vacant.insert(backend)
                }
            };

            for port in &ep.ports {
                if let Some((name, l4)) = parse_slice_port(port) {
                    backend.ports.insert(name, l4);
                }
            }
        }
    }

    (parse_endpoint_slice_id(ep), endpoints)
}

/// Port name and address for a slice port, or `None` when the port is
/// unusable: an unsupported protocol or a missing port number. An
/// unspecified protocol defaults to TCP; an unspecified name to the empty
/// string.
fn parse_slice_port(port: &SlicePort) -> Option<(String, L4Addr)> {
    let proto = match &port.protocol {
        Some(protocol) => L4Proto::parse(protocol)?,
        None => L4Proto::Tcp,
    };
    let number = port.port?;
    let name = port.name.clone().unwrap_or_default();
    Some((name, L4Addr::new(proto, number)))
}
