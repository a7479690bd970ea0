//! Chat completion backend

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::RelayError;
use crate::protocol::{ChatRequest, ChatResponse};

/// Default Groq API base URL (OpenAI-compatible surface)
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Seam between the conversion service and the completion provider
///
/// Keeps the service testable without a live provider; production uses
/// [`GroqClient`].
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Submit one non-streamed chat completion request
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, RelayError>;
}

/// Groq HTTP client
///
/// Constructed once at startup; read-only afterwards, so it is shared across
/// requests without synchronization.
pub struct GroqClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl GroqClient {
    /// Create a client from an API key and optional base URL override
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(api_key: SecretString, base_url: Option<Url>) -> Self {
        let base_url =
            base_url.unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl ChatBackend for GroqClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, RelayError> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "upstream request failed");
                RelayError::Upstream(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "upstream returned error");
            return Err(RelayError::Upstream(format!("provider returned {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| RelayError::Upstream(format!("failed to parse response: {e}")))
    }
}
