use crate::converters::gemini::GeminiContent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiCountTokensRequest {
    #[serde(default)]
    pub contents: Vec<GeminiContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiCountTokensResponse {
    #[serde(rename = "totalTokens")]
    pub total_tokens: u32,
}
