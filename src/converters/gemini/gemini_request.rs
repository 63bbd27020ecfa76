use serde::{Deserialize, Serialize};

use crate::converters::gemini::{GeminiContent, GeminiGenerationConfig, GeminiSystemInstruction};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    // Set by the caller (URL path or CLI); a body `model` field is ignored
    #[serde(skip)]
    pub model: String,
    #[serde(default)]
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", alias = "system_instruction")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiSystemInstruction>,
    #[serde(rename = "generationConfig", alias = "generation_config")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}
