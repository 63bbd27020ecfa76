use crate::converters::openai::OpenAIResponseMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<OpenAIResponseMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<OpenAIResponseMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<Value>,
    // index, logprobs and anything else the server adds
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

impl OpenAIChoice {
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_ref().and_then(OpenAIResponseMessage::text)
    }

    pub fn delta_text(&self) -> Option<&str> {
        self.delta.as_ref().and_then(OpenAIResponseMessage::text)
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.finish_reason.as_ref().and_then(Value::as_str)
    }
}
