use crate::converters::gemini::{
    GeminiContent, GeminiFinishReason, GeminiPart, GeminiSystemInstruction,
};
use crate::converters::openai::{OpenAIChoice, OpenAIMessage, OpenAIRole};

/// Flattens parts into one human-readable string.
///
/// Lossy: function calls and responses become plain lines and cannot be
/// turned back into typed parts.
pub fn render_parts(parts: &[GeminiPart]) -> String {
    parts
        .iter()
        .map(render_part)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_part(part: &GeminiPart) -> String {
    match part {
        GeminiPart::Text { text } => text.clone(),
        GeminiPart::FunctionCall { function_call } => format!(
            "Function call {}: {}",
            function_call.name,
            to_json_or_empty_object(function_call.args.as_ref())
        ),
        GeminiPart::FunctionResponse { function_response } => format!(
            "Function response {}: {}",
            function_response.name,
            to_json_or_empty_object(function_response.response.as_ref())
        ),
        GeminiPart::InlineData { .. } | GeminiPart::Other(_) => String::new(),
    }
}

fn to_json_or_empty_object(value: Option<&serde_json::Value>) -> String {
    value
        .and_then(|v| serde_json::to_string(v).ok())
        .unwrap_or_else(|| "{}".to_string())
}

// Anything other than exactly "user" is the assistant side
pub fn map_gemini_role_to_openai(role: Option<&str>) -> OpenAIRole {
    match role {
        Some("user") => OpenAIRole::User,
        _ => OpenAIRole::Assistant,
    }
}

pub fn map_openai_finish_reason_to_gemini(finish_reason: Option<&str>) -> GeminiFinishReason {
    match finish_reason {
        Some("length") => GeminiFinishReason::MaxTokens,
        _ => GeminiFinishReason::Stop,
    }
}

/// Builds the backend message list: optional system message first, then one
/// message per content in order. Empty contents are kept.
pub fn to_openai_messages(
    contents: &[GeminiContent],
    system_instruction: Option<&GeminiSystemInstruction>,
) -> Vec<OpenAIMessage> {
    let mut messages = Vec::with_capacity(contents.len() + 1);

    if let Some(system) = system_instruction {
        let content = match system {
            GeminiSystemInstruction::Text(text) => text.clone(),
            GeminiSystemInstruction::Content(content) => render_parts(&content.parts),
        };
        messages.push(OpenAIMessage {
            role: OpenAIRole::System,
            content,
        });
    }

    messages.extend(contents.iter().map(|c| OpenAIMessage {
        role: map_gemini_role_to_openai(c.role.as_deref()),
        content: render_parts(&c.parts),
    }));

    messages
}

pub fn describe_missing_content(choice: Option<&OpenAIChoice>) -> String {
    match choice {
        Some(c) => format!(
            "Error: backend response has no message or delta content: {}",
            serde_json::to_string(c).unwrap_or_else(|_| "{}".to_string())
        ),
        None => "Error: backend response has no choices".to_string(),
    }
}
