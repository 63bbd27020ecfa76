//! Approximate token counting for backends without a tokenizer endpoint.

use crate::converters::gemini::GeminiPart;
use crate::converters::helpers;

const CHARS_PER_TOKEN: usize = 4;

/// Heuristic estimate, roughly four characters per token. Never returns 0.
pub fn estimate_tokens(parts: &[GeminiPart]) -> u32 {
    let chars = helpers::render_parts(parts).chars().count();
    let tokens = chars.div_ceil(CHARS_PER_TOKEN).max(1);
    u32::try_from(tokens).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(len: usize) -> Vec<GeminiPart> {
        vec![GeminiPart::text("a".repeat(len))]
    }

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens(&[]), 1);
        assert_eq!(estimate_tokens(&text(0)), 1);
        assert_eq!(estimate_tokens(&text(4)), 1);
        assert_eq!(estimate_tokens(&text(5)), 2);
        assert_eq!(estimate_tokens(&text(40)), 10);
    }

    #[test]
    fn test_estimate_counts_rendered_text() {
        // "ab\ncd" is five characters once joined
        let parts = vec![GeminiPart::text("ab"), GeminiPart::text("cd")];
        assert_eq!(estimate_tokens(&parts), 2);
        // characters, not bytes
        assert_eq!(estimate_tokens(&[GeminiPart::text("héllo")]), 2);
        assert_eq!(estimate_tokens(&[GeminiPart::text("日本語で")]), 1);
    }
}
