//! Axum route handler for the conversion endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::{Deserialize, Serialize};

use crate::error::RelayError;
use crate::state::RelayState;

/// Build the relay router
pub fn relay_router(state: RelayState) -> Router {
    Router::new()
        .route("/api/convert", routing::post(convert))
        .with_state(state)
}

/// Conversion request body
///
/// Absent fields default to empty strings so the service reports them with
/// the same generic validation message as explicitly empty ones.
#[derive(Debug, Deserialize)]
struct ConvertRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    target: String,
}

/// Conversion response body
#[derive(Debug, Serialize)]
struct ConvertResponse {
    original_text: String,
    converted_text: String,
    target: String,
}

/// Handle `POST /api/convert`
async fn convert(
    State(state): State<RelayState>,
    Json(request): Json<ConvertRequest>,
) -> Response {
    match state.convert(&request.text, &request.target).await {
        Ok(conversion) => Json(ConvertResponse {
            original_text: conversion.original_text,
            converted_text: conversion.converted_text,
            target: conversion.target,
        })
        .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Translate a relay error into the `{ "error": … }` JSON body
fn error_response(error: &RelayError) -> Response {
    tracing::error!(error = %error, "conversion failed");

    let body = serde_json::json!({ "error": error.client_message() });
    (error.status_code(), Json(body)).into_response()
}
