use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::health::HealthConfig;

/// HTTP server configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind; defaults to 0.0.0.0:5000 when absent
    pub listen_address: Option<SocketAddr>,
    /// Health check endpoint
    #[serde(default)]
    pub health: HealthConfig,
    /// Whether to attach a permissive CORS layer
    #[serde(default = "default_cors")]
    pub cors: bool,
    /// Directory the static front-end bundle is served from
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            health: HealthConfig::default(),
            cors: true,
            assets_dir: default_assets_dir(),
        }
    }
}

const fn default_cors() -> bool {
    true
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}
