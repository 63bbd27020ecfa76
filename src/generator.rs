//! The generic content-generation capability and its local-backend implementation.

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tracing::{debug, info};

use crate::converters::gemini::{
    GeminiCountTokensRequest, GeminiCountTokensResponse, GeminiEmbedContentRequest,
    GeminiEmbedContentResponse, GeminiPart, GeminiRequest, GeminiResponse,
};
use crate::converters::openai::OpenAIRequest;
use crate::converters::token_estimator;
use crate::error::{Error, Result};
use crate::llm_client::LlmClient;

pub type GenerateContentStream = BoxStream<'static, Result<GeminiResponse>>;

/// What a generic client needs from any backend.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(&self, request: GeminiRequest) -> Result<GeminiResponse>;

    async fn generate_content_stream(
        &self,
        request: GeminiRequest,
    ) -> Result<GenerateContentStream>;

    async fn count_tokens(
        &self,
        request: GeminiCountTokensRequest,
    ) -> Result<GeminiCountTokensResponse>;

    async fn embed_content(
        &self,
        request: GeminiEmbedContentRequest,
    ) -> Result<GeminiEmbedContentResponse>;
}

/// Generator backed by a local OpenAI-compatible chat-completion server.
#[derive(Debug, Clone)]
pub struct LocalContentGenerator {
    client: LlmClient,
    default_model: String,
}

impl LocalContentGenerator {
    pub fn new(client: LlmClient, default_model: impl Into<String>) -> Self {
        Self {
            client,
            default_model: default_model.into(),
        }
    }
}

#[async_trait]
impl ContentGenerator for LocalContentGenerator {
    async fn generate_content(&self, request: GeminiRequest) -> Result<GeminiResponse> {
        let mut openai_req = OpenAIRequest::from(request);
        if openai_req.model.is_empty() {
            openai_req.model = self.default_model.clone();
        }
        debug!(
            "translated {} messages for model {}",
            openai_req.messages.len(),
            openai_req.model
        );

        let openai_resp = self.client.chat_completion(&openai_req).await?;
        Ok(openai_resp.into())
    }

    /// Not incremental: the backend call completes first, then the whole
    /// response is yielded as the only item.
    async fn generate_content_stream(
        &self,
        request: GeminiRequest,
    ) -> Result<GenerateContentStream> {
        let response = self.generate_content(request).await?;
        Ok(stream::once(async move { Ok(response) }).boxed())
    }

    async fn count_tokens(
        &self,
        request: GeminiCountTokensRequest,
    ) -> Result<GeminiCountTokensResponse> {
        let parts: Vec<GeminiPart> = request
            .contents
            .into_iter()
            .flat_map(|c| c.parts)
            .collect();
        let total_tokens = token_estimator::estimate_tokens(&parts);
        debug!("estimated {} tokens for {} parts", total_tokens, parts.len());
        Ok(GeminiCountTokensResponse { total_tokens })
    }

    async fn embed_content(
        &self,
        _request: GeminiEmbedContentRequest,
    ) -> Result<GeminiEmbedContentResponse> {
        info!("Rejecting embedContent for {}", self.client.backend_name());
        Err(Error::unsupported("embedContent", self.client.backend_name()))
    }
}
