use crate::converters::gemini::{GeminiContent, GeminiFinishReason};
use serde::{Deserialize, Serialize};

// The bridge always emits exactly one candidate per response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
    #[serde(rename = "finishReason")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<GeminiFinishReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}
