//! Mock Groq backend server for integration tests
//!
//! Implements the minimal OpenAI-compatible chat completion surface the
//! relay talks to, returning canned responses.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Mock Groq backend that returns predictable responses
pub struct MockGroq {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockGroqState>,
}

struct MockGroqState {
    completion_count: AtomicU32,
    /// When true, every request fails with 500
    always_fail: bool,
    /// Custom completion content (if set)
    response_content: Option<String>,
    /// Most recent request body, for asserting prompt selection
    last_request: Mutex<Option<serde_json::Value>>,
}

impl MockGroq {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(false, None).await
    }

    /// Start a mock server that fails every request with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(true, None).await
    }

    /// Start a mock server with a custom completion content
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(false, Some(content.to_owned())).await
    }

    async fn start_inner(always_fail: bool, response_content: Option<String>) -> anyhow::Result<Self> {
        let state = Arc::new(MockGroqState {
            completion_count: AtomicU32::new(0),
            always_fail,
            response_content,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the Groq backend
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Most recent completion request body
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockGroq {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Wire types matching the OpenAI-compatible format --

#[derive(Debug, Serialize)]
struct ChatCompletionResponse {
    id: String,
    object: String,
    created: u64,
    model: String,
    choices: Vec<Choice>,
    usage: Usage,
}

#[derive(Debug, Serialize)]
struct Choice {
    index: u32,
    message: ResponseMessage,
    finish_reason: String,
}

#[derive(Debug, Serialize)]
struct ResponseMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionRequest {
    model: String,
    #[allow(dead_code)]
    messages: Vec<serde_json::Value>,
}

// -- Handler --

async fn handle_chat_completions(
    State(state): State<Arc<MockGroqState>>,
    Json(raw): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);
    *state.last_request.lock().unwrap() = Some(raw.clone());

    if state.always_fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": {
                    "message": "mock server intentional failure",
                    "type": "server_error"
                }
            })),
        )
            .into_response();
    }

    let request: ChatCompletionRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": { "message": e.to_string(), "type": "invalid_request_error" }
                })),
            )
                .into_response();
        }
    };

    let content = state
        .response_content
        .as_deref()
        .unwrap_or("Hello from mock Groq");

    let response = ChatCompletionResponse {
        id: "chatcmpl-test-123".to_owned(),
        object: "chat.completion".to_owned(),
        created: 1_700_000_000,
        model: request.model,
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: "assistant".to_owned(),
                content: content.to_owned(),
            },
            finish_reason: "stop".to_owned(),
        }],
        usage: Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        },
    };

    Json(response).into_response()
}
