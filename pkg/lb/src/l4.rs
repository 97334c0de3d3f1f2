use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// L4 protocol of a backend port. Only TCP and UDP are routable by the
/// service proxy; anything else found on the wire is dropped at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum L4Proto {
    Tcp,
    Udp,
}

impl L4Proto {
    /// Parse a Kubernetes protocol string. Returns `None` for unsupported
    /// protocols (e.g. `SCTP`).
    pub fn parse(protocol: &str) -> Option<L4Proto> {
        match protocol {
            "TCP" => Some(L4Proto::Tcp),
            "UDP" => Some(L4Proto::Udp),
            _ => None,
        }
    }
}

impl std::fmt::Display for L4Proto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            L4Proto::Tcp => write!(f, "TCP"),
            L4Proto::Udp => write!(f, "UDP"),
        }
    }
}

/// A protocol + port pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct L4Addr {
    pub proto: L4Proto,
    pub port: u16,
}

impl L4Addr {
    pub fn new(proto: L4Proto, port: u16) -> Self {
        Self { proto, port }
    }
}

/// Map of port name to address. The empty string is a valid key and marks
/// an unnamed port.
pub type PortConfiguration = HashMap<String, L4Addr>;
