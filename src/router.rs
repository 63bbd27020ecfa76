use crate::config::Config;
use crate::converters::gemini::{GeminiCountTokensRequest, GeminiEmbedContentRequest, GeminiRequest};
use crate::error::Error;
use crate::generator::ContentGenerator;
use crate::models::ErrorResponse;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, Sse},
    },
    routing::{get, post},
};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ContentGenerator>,
    pub config: Arc<Config>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // e.g. /v1beta/models/gemini-2.5-flash:generateContent
        .route("/v1beta/models/{model_action}", post(model_action))
        .route("/health", get(|| async { "OK" }))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn model_action(
    State(state): State<AppState>,
    Path(model_action): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "model_action",
        trace_id = %request_id,
        target = %model_action
    );
    handle_model_action(state, model_action, body)
        .instrument(span)
        .await
}

async fn handle_model_action(state: AppState, model_action: String, body: Value) -> Response {
    let Some((model, action)) = model_action.rsplit_once(':') else {
        return error_response(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Missing action in {}", model_action),
        );
    };
    info!("{} requested for model {}", action, model);

    match action {
        "generateContent" => {
            let mut request: GeminiRequest = match parse_body(body) {
                Ok(req) => req,
                Err(resp) => return resp,
            };
            request.model = state.config.resolve_model(model);
            match state.generator.generate_content(request).await {
                Ok(resp) => Json(resp).into_response(),
                Err(e) => generator_error(e),
            }
        }
        "streamGenerateContent" => {
            let mut request: GeminiRequest = match parse_body(body) {
                Ok(req) => req,
                Err(resp) => return resp,
            };
            request.model = state.config.resolve_model(model);
            match state.generator.generate_content_stream(request).await {
                Ok(stream) => {
                    let events = stream.map(|item| match item {
                        Ok(resp) => Event::default().json_data(resp),
                        Err(e) => Ok(Event::default().event("error").data(e.to_string())),
                    });
                    Sse::new(events).into_response()
                }
                Err(e) => generator_error(e),
            }
        }
        "countTokens" => {
            let request: GeminiCountTokensRequest = match parse_body(body) {
                Ok(req) => req,
                Err(resp) => return resp,
            };
            match state.generator.count_tokens(request).await {
                Ok(resp) => Json(resp).into_response(),
                Err(e) => generator_error(e),
            }
        }
        "embedContent" => {
            let request: GeminiEmbedContentRequest = match parse_body(body) {
                Ok(req) => req,
                Err(resp) => return resp,
            };
            match state.generator.embed_content(request).await {
                Ok(resp) => Json(resp).into_response(),
                Err(e) => generator_error(e),
            }
        }
        other => error_response(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Unknown action: {}", other),
        ),
    }
}

fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, Response> {
    serde_json::from_value(body).map_err(|e| {
        warn!("Invalid request body: {}", e);
        error_response(
            StatusCode::BAD_REQUEST,
            "INVALID_ARGUMENT",
            format!("Invalid request body: {}", e),
        )
    })
}

fn generator_error(err: Error) -> Response {
    warn!("Request failed: {}", err);
    let (status, label) = match &err {
        Error::Unsupported { .. } => (StatusCode::NOT_IMPLEMENTED, "UNIMPLEMENTED"),
        Error::Http { .. } | Error::Transport { .. } => {
            (StatusCode::BAD_GATEWAY, "UNAVAILABLE")
        }
        Error::Decode { .. } => (StatusCode::BAD_GATEWAY, "INTERNAL"),
    };
    error_response(status, label, err.to_string())
}

fn error_response(status: StatusCode, label: &str, message: String) -> Response {
    (
        status,
        Json(ErrorResponse::new(status.as_u16(), label, message)),
    )
        .into_response()
}
