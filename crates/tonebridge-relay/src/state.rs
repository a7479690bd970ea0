//! Conversion service state

use std::sync::Arc;

use crate::Audience;
use crate::backend::ChatBackend;
use crate::error::RelayError;
use crate::prompts::system_prompt;
use crate::protocol::{ChatMessage, ChatRequest};

/// Fixed generation parameters, matching the single-call contract
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 1.0;
const MAX_TOKENS: u32 = 1024;

/// Characters of input text included in log lines
const PREVIEW_CHARS: usize = 50;

/// Shared state for the conversion handler
///
/// A `None` backend is the permanent degraded mode: the credential was
/// missing at startup, and every conversion fails without a network call for
/// the rest of the process lifetime.
#[derive(Clone)]
pub struct RelayState {
    inner: Arc<RelayStateInner>,
}

struct RelayStateInner {
    backend: Option<Arc<dyn ChatBackend>>,
    model: String,
}

/// Result of one successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The caller's text, verbatim
    pub original_text: String,
    /// The model's rewritten text
    pub converted_text: String,
    /// The caller's target value, original casing preserved
    pub target: String,
}

impl RelayState {
    /// Build the service state
    pub fn new(backend: Option<Arc<dyn ChatBackend>>, model: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RelayStateInner {
                backend,
                model: model.into(),
            }),
        }
    }

    /// Whether a working backend was constructed at startup
    pub fn is_degraded(&self) -> bool {
        self.inner.backend.is_none()
    }

    /// Convert `text` into the register named by `target`
    ///
    /// Stateless per request: validates, selects the system prompt, issues
    /// one synchronous completion call, and relays the first choice.
    ///
    /// # Errors
    ///
    /// Returns `BackendUnavailable` in degraded mode (checked before any
    /// validation, so degraded mode answers uniformly), `MissingFields` when
    /// either input is empty, `UnsupportedTarget` when `target` does not
    /// normalize to a known audience, and `Upstream` when the provider call
    /// fails or yields no completion.
    pub async fn convert(&self, text: &str, target: &str) -> Result<Conversion, RelayError> {
        let Some(backend) = &self.inner.backend else {
            tracing::error!("conversion attempted but no chat backend is configured");
            return Err(RelayError::BackendUnavailable);
        };

        if text.is_empty() || target.is_empty() {
            return Err(RelayError::MissingFields);
        }

        let audience: Audience = target
            .parse()
            .map_err(|_| RelayError::UnsupportedTarget { target: target.to_owned() })?;

        tracing::info!(
            %audience,
            preview = %preview(text),
            "converting text"
        );

        let request = ChatRequest {
            model: self.inner.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt(audience)),
                ChatMessage::user(text),
            ],
            temperature: Some(TEMPERATURE),
            top_p: Some(TOP_P),
            max_tokens: Some(MAX_TOKENS),
            stop: None,
            stream: Some(false),
        };

        let response = backend.chat(&request).await?;

        let converted_text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| RelayError::Upstream("completion contained no choices".to_owned()))?;

        tracing::info!(%audience, "conversion successful");

        Ok(Conversion {
            original_text: text.to_owned(),
            converted_text,
            target: target.to_owned(),
        })
    }
}

/// Truncated, char-boundary-safe preview of the input for logging
fn preview(text: &str) -> String {
    let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
    if truncated.len() < text.len() {
        format!("{truncated}...")
    } else {
        truncated
    }
}
