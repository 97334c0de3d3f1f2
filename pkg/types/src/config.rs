use serde::{Deserialize, Serialize};

/// Agent configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// server: https://10.0.0.1:6443
/// node-name: worker-1
/// service-proxy-port: 10256
/// enable-endpoint-slice: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfigFile {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default, alias = "node-name")]
    pub node_name: Option<String>,
    #[serde(default, alias = "service-proxy-port")]
    pub service_proxy_port: Option<u16>,
    /// Watch EndpointSlice objects instead of legacy Endpoints when the
    /// cluster serves them.
    #[serde(
        default = "default_enable_endpoint_slice",
        alias = "enable-endpoint-slice"
    )]
    pub enable_endpoint_slice: bool,
}

fn default_enable_endpoint_slice() -> bool {
    true
}

impl Default for AgentConfigFile {
    fn default() -> Self {
        Self {
            server: None,
            node_name: None,
            service_proxy_port: None,
            enable_endpoint_slice: true,
        }
    }
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
