use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::converters::gemini::{GeminiFunctionCall, GeminiFunctionResponse, GeminiInlineData};

/// One unit of a turn's payload. Exactly one variant is active per part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: GeminiFunctionCall,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: GeminiFunctionResponse,
    },
    /// Any shape not listed above, kept verbatim.
    Other(Value),
}

impl GeminiPart {
    pub fn text(text: impl Into<String>) -> Self {
        GeminiPart::Text { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_variants_deserialize() {
        let parts: Vec<GeminiPart> = serde_json::from_value(json!([
            { "text": "hi" },
            { "functionCall": { "name": "lookup", "args": { "q": "x" } } },
            { "functionResponse": { "name": "lookup" } },
            { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
            { "fileData": { "fileUri": "gs://x" } }
        ]))
        .expect("Failed to parse parts");

        assert!(
            matches!(&parts[0], GeminiPart::Text { text } if text == "hi")
        );
        match &parts[1] {
            GeminiPart::FunctionCall { function_call } => {
                assert_eq!(function_call.name, "lookup");
                assert_eq!(function_call.args, Some(json!({ "q": "x" })));
            }
            other => panic!("Expected function call, got {:?}", other),
        }
        match &parts[2] {
            GeminiPart::FunctionResponse { function_response } => {
                assert_eq!(function_response.name, "lookup");
                assert!(function_response.response.is_none());
            }
            other => panic!("Expected function response, got {:?}", other),
        }
        assert!(matches!(&parts[3], GeminiPart::InlineData { .. }));
        assert!(matches!(&parts[4], GeminiPart::Other(_)));
    }
}
