use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// Shared by `message` and `delta`. Fields stay loosely typed so an odd shape
// degrades to a missing-content description instead of a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIResponseMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

impl OpenAIResponseMessage {
    /// `content` when it is a plain string.
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }
}
