use crate::converters::gemini::GeminiContent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiEmbedContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<GeminiContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiEmbedContentResponse {
    pub embedding: GeminiEmbedding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiEmbedding {
    pub values: Vec<f32>,
}
