use std::path::PathBuf;

use clap::Parser;

/// Tonebridge tone conversion relay
#[derive(Debug, Parser)]
#[command(name = "tonebridge", about = "Korean business-tone conversion relay")]
pub struct Args {
    /// Path to configuration file; defaults apply when the file is absent
    #[arg(short, long, default_value = "tonebridge.toml", env = "TONEBRIDGE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "TONEBRIDGE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
