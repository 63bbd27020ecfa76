use crate::converters::helpers;
use crate::converters::openai::{OpenAIChoice, OpenAIResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::converters::gemini::{GeminiCandidate, GeminiContent, GeminiPart, GeminiUsage};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiResponse {
    pub candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<GeminiUsage>,
    #[serde(rename = "modelVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(rename = "responseId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| helpers::render_parts(&c.content.parts))
            .unwrap_or_default()
    }
}

impl From<OpenAIResponse> for GeminiResponse {
    fn from(openai_resp: OpenAIResponse) -> Self {
        let first = openai_resp.choices.first();

        // message, then delta, then a description of whatever came back
        let text = first
            .and_then(|c| c.message_text().or_else(|| c.delta_text()))
            .map(str::to_string)
            .unwrap_or_else(|| helpers::describe_missing_content(first));

        let finish_reason = helpers::map_openai_finish_reason_to_gemini(
            first.and_then(OpenAIChoice::finish_reason),
        );

        let candidate = GeminiCandidate {
            content: GeminiContent {
                role: Some("model".to_string()),
                parts: vec![GeminiPart::Text { text }],
            },
            finish_reason: Some(finish_reason),
            index: Some(0),
        };

        GeminiResponse {
            candidates: vec![candidate],
            usage_metadata: openai_resp.usage.map(|u| GeminiUsage {
                prompt_token_count: u.prompt_tokens,
                candidates_token_count: u.completion_tokens,
                total_token_count: u.total_tokens,
            }),
            model_version: openai_resp.model,
            response_id: Some(openai_resp.id.unwrap_or_else(|| Uuid::new_v4().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::gemini::GeminiFinishReason;
    use serde_json::json;

    fn convert(value: serde_json::Value) -> GeminiResponse {
        let openai_response: OpenAIResponse =
            serde_json::from_value(value).expect("Failed to parse OpenAI response");
        openai_response.into()
    }

    #[test]
    fn test_openai_to_gemini_response() {
        let gemini_response = convert(json!({
            "id": "chatcmpl-123",
            "model": "qwen2.5-7b-instruct",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "The answer is 42." },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 }
        }));

        assert_eq!(gemini_response.candidates.len(), 1);
        let candidate = &gemini_response.candidates[0];
        assert_eq!(candidate.content.role.as_deref(), Some("model"));
        assert_eq!(gemini_response.text(), "The answer is 42.");
        assert_eq!(candidate.finish_reason, Some(GeminiFinishReason::Stop));
        assert_eq!(
            gemini_response.model_version.as_deref(),
            Some("qwen2.5-7b-instruct")
        );
        assert_eq!(gemini_response.response_id.as_deref(), Some("chatcmpl-123"));

        let usage = gemini_response.usage_metadata.expect("Expected usage metadata");
        assert_eq!(usage.prompt_token_count, Some(9));
        assert_eq!(usage.candidates_token_count, Some(12));
        assert_eq!(usage.total_token_count, Some(21));
    }

    #[test]
    fn test_length_maps_to_max_tokens() {
        let gemini_response = convert(json!({
            "choices": [{ "message": { "content": "truncat" }, "finish_reason": "length" }]
        }));
        assert_eq!(
            gemini_response.candidates[0].finish_reason,
            Some(GeminiFinishReason::MaxTokens)
        );
    }

    #[test]
    fn test_other_or_missing_finish_reason_maps_to_stop() {
        for reason in [json!("stop"), json!("tool_calls"), json!("content_filter"), json!(null)] {
            let gemini_response = convert(json!({
                "choices": [{ "message": { "content": "ok" }, "finish_reason": reason }]
            }));
            assert_eq!(
                gemini_response.candidates[0].finish_reason,
                Some(GeminiFinishReason::Stop)
            );
        }
    }

    #[test]
    fn test_delta_content_used_when_message_missing() {
        let gemini_response = convert(json!({
            "choices": [{ "delta": { "content": "partial text" } }]
        }));
        assert_eq!(gemini_response.text(), "partial text");
    }

    #[test]
    fn test_missing_content_degrades_to_error_description() {
        let gemini_response = convert(json!({
            "choices": [{ "finish_reason": "stop", "logprobs": null }]
        }));
        let text = gemini_response.text();
        assert!(text.starts_with("Error:"));
        assert!(text.contains("finish_reason"));
        assert_eq!(
            gemini_response.candidates[0].finish_reason,
            Some(GeminiFinishReason::Stop)
        );
    }

    #[test]
    fn test_non_string_content_degrades_to_error_description() {
        let gemini_response = convert(json!({
            "choices": [{
                "index": "0",
                "message": { "content": [{ "type": "text", "text": "hi" }] },
                "finish_reason": "stop"
            }]
        }));
        let text = gemini_response.text();
        assert!(text.starts_with("Error:"));
        assert!(text.contains("\"type\":\"text\""));
        assert_eq!(
            gemini_response.candidates[0].finish_reason,
            Some(GeminiFinishReason::Stop)
        );
    }

    #[test]
    fn test_non_string_message_content_falls_back_to_delta() {
        let gemini_response = convert(json!({
            "choices": [{
                "message": { "content": 42 },
                "delta": { "content": "from delta" },
                "finish_reason": 7
            }]
        }));
        assert_eq!(gemini_response.text(), "from delta");
        assert_eq!(
            gemini_response.candidates[0].finish_reason,
            Some(GeminiFinishReason::Stop)
        );
    }

    #[test]
    fn test_empty_choices_degrades_to_error_description() {
        let gemini_response = convert(json!({ "choices": [] }));
        assert_eq!(gemini_response.candidates.len(), 1);
        assert!(gemini_response.text().starts_with("Error:"));
    }

    #[test]
    fn test_usage_absent_stays_absent() {
        let gemini_response = convert(json!({
            "choices": [{ "message": { "content": "ok" } }]
        }));
        assert!(gemini_response.usage_metadata.is_none());

        let body = serde_json::to_value(&gemini_response).expect("Failed to serialize");
        assert!(body.get("usageMetadata").is_none());
        assert_eq!(body["candidates"][0]["finishReason"], "STOP");
        assert_eq!(body["candidates"][0]["content"]["parts"][0]["text"], "ok");
    }
}
