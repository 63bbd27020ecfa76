use crate::converters::gemini::GeminiRequest;
use crate::converters::helpers;
use crate::converters::openai::OpenAIMessage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl From<GeminiRequest> for OpenAIRequest {
    fn from(gemini: GeminiRequest) -> Self {
        let messages =
            helpers::to_openai_messages(&gemini.contents, gemini.system_instruction.as_ref());
        let config = gemini.generation_config.unwrap_or_default();

        OpenAIRequest {
            model: gemini.model,
            messages,
            // The backend is always called one-shot
            stream: false,
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::openai::OpenAIRole;
    use serde_json::json;

    #[test]
    fn test_gemini_to_openai_request() {
        let mut gemini: GeminiRequest = serde_json::from_value(json!({
            "systemInstruction": "Be concise",
            "contents": [
                { "role": "user", "parts": [{ "text": "What is 2+2?" }] },
                { "role": "model", "parts": [{ "text": "4" }] },
                { "role": "user", "parts": [{ "text": "And 3+3?" }] }
            ],
            "generationConfig": { "temperature": 0.7, "topP": 0.9, "maxOutputTokens": 256 }
        }))
        .expect("Failed to parse Gemini request");
        gemini.model = "qwen2.5-7b-instruct".to_string();

        let openai: OpenAIRequest = gemini.into();
        assert_eq!(openai.model, "qwen2.5-7b-instruct");
        assert!(!openai.stream);
        assert_eq!(openai.messages.len(), 4);
        assert_eq!(openai.messages[0].role, OpenAIRole::System);
        assert_eq!(openai.messages[0].content, "Be concise");
        assert_eq!(openai.messages[1].role, OpenAIRole::User);
        assert_eq!(openai.messages[1].content, "What is 2+2?");
        assert_eq!(openai.messages[2].role, OpenAIRole::Assistant);
        assert_eq!(openai.messages[3].content, "And 3+3?");

        let body = serde_json::to_value(&openai).expect("Failed to serialize");
        assert_eq!(body["stream"], false);
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["top_p"], 0.9);
        assert_eq!(body["max_tokens"], 256);
        assert_eq!(
            body["messages"][0],
            json!({ "role": "system", "content": "Be concise" })
        );
    }

    #[test]
    fn test_absent_generation_config_omits_knobs() {
        let gemini: GeminiRequest = serde_json::from_value(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
            "generationConfig": { "temperature": 0.0 }
        }))
        .expect("Failed to parse Gemini request");

        let body = serde_json::to_value(OpenAIRequest::from(gemini)).expect("Failed to serialize");
        let obj = body.as_object().expect("object body");
        assert_eq!(body["temperature"], 0.0);
        assert!(!obj.contains_key("top_p"));
        assert!(!obj.contains_key("max_tokens"));
        assert_eq!(obj.len(), 4);
    }
}
