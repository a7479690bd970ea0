use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Default model used for tone conversion
pub const DEFAULT_MODEL: &str = "moonshotai/kimi-k2-instruct-0905";

/// Groq chat-completion backend configuration
///
/// The API key may be supplied here (typically via `{{ env.GROQ_API_KEY }}`
/// in the config file) or left unset, in which case the server falls back to
/// reading `GROQ_API_KEY` directly from the environment at startup.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroqConfig {
    /// API key for bearer authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override for OpenAI-compatible endpoints
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier submitted with every completion request
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}
