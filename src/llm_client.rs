use crate::config::BackendConfig;
use crate::converters::openai::{OpenAIRequest, OpenAIResponse};
use crate::error::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Thin HTTP client for the backend's chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http_client: Arc<reqwest::Client>,
    api_base: String,
    backend_name: String,
}

impl LlmClient {
    pub fn new(http_client: Arc<reqwest::Client>, backend: &BackendConfig) -> Self {
        Self {
            http_client,
            api_base: backend.api_base.clone(),
            backend_name: backend.name.clone(),
        }
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    fn build_target_url(&self) -> String {
        let path = "chat/completions";
        if self.api_base.ends_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }

    /// One POST, no retries. Non-2xx statuses surface with their body.
    pub async fn chat_completion(&self, request: &OpenAIRequest) -> Result<OpenAIResponse> {
        let target_url = self.build_target_url();
        info!("Forwarding request to: {}", target_url);
        debug!(
            "request body: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let response = self
            .http_client
            .post(&target_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| self.transport_error(source))?;

        if !status.is_success() {
            warn!("{} returned {}: {}", self.backend_name, status, body);
            return Err(Error::Http {
                backend: self.backend_name.clone(),
                status: status.as_u16(),
                body,
            });
        }

        debug!("raw response: {}", body);
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            backend: self.backend_name.clone(),
            source,
        })
    }

    fn transport_error(&self, source: reqwest::Error) -> Error {
        warn!("{} request failed: {}", self.backend_name, source);
        Error::Transport {
            backend: self.backend_name.clone(),
            source,
        }
    }
}
