use axum::Json;
use axum::response::IntoResponse;

/// Liveness probe
///
/// Reports only that the process is serving; a degraded relay (no Groq
/// credential) is still alive, so the probe stays green while conversions
/// return 500.
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
