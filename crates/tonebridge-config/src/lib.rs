#![allow(clippy::must_use_candidate)]

mod env;
pub mod groq;
pub mod health;
mod loader;
pub mod server;

use serde::Deserialize;

pub use groq::GroqConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;

/// Top-level tonebridge configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Groq chat-completion backend configuration
    #[serde(default)]
    pub groq: GroqConfig,
}
