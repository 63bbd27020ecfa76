use serde::{Deserialize, Serialize};

// Accepted on the wire; the chat backend only takes text, so it renders to nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}
