use crate::converters::gemini::GeminiPart;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>, // "user" or "model"
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user_text(text: impl Into<String>) -> Self {
        GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart::text(text)],
        }
    }
}

/// `systemInstruction` may be a bare string or a full content value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiSystemInstruction {
    Text(String),
    Content(GeminiContent),
}
