/// Prompt-size bounds. Compile-time defaults, passed explicitly so the
/// truncation and prompt functions stay pure.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum report characters fed into the prompt
    pub max_input_chars: usize,
    /// Maximum tokens the model may generate
    pub max_new_tokens: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
            max_new_tokens: 64,
        }
    }
}

/// Cap text at `max_chars` characters. Cuts mid-word; no boundary snapping.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Combine report text and question into the fixed instruction template.
/// Nothing is escaped; the report and question land in the template verbatim.
pub fn build_prompt(report_text: &str, question: &str) -> String {
    format!(
        "You are a medical AI assistant.\n\
         This is NOT a medical diagnosis.\n\
         \n\
         Medical Report:\n\
         {report_text}\n\
         \n\
         Question:\n\
         {question}\n\
         \n\
         Answer briefly and clearly."
    )
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_input_untouched() {
        assert_eq!(truncate("abc", 2000), "abc");
        assert_eq!(truncate("", 2000), "");
    }

    #[test]
    fn test_truncate_exact_prefix() {
        let long = "x".repeat(5000);
        let cut = truncate(&long, 2000);
        assert_eq!(cut.len(), 2000);
        assert_eq!(cut, long[..2000]);
    }

    #[test]
    fn test_truncate_is_idempotent() {
        let long = "word ".repeat(1000);
        let once = truncate(&long, 2000);
        assert_eq!(truncate(&once, 2000), once);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(truncate(&text, 4).chars().count(), 4);
    }

    #[test]
    fn test_prompt_template_sections_in_order() {
        let prompt = build_prompt("BP 120/80", "Is this normal?");

        assert!(prompt.starts_with("You are a medical AI assistant."));
        assert!(prompt.ends_with("Answer briefly and clearly."));

        let report = prompt.find("Medical Report:\nBP 120/80").unwrap();
        let question = prompt.find("Question:\nIs this normal?").unwrap();
        assert!(report < question);
    }

    #[test]
    fn test_prompt_allows_empty_question() {
        let prompt = build_prompt("findings", "");
        assert!(prompt.contains("Question:\n\n"));
    }
}
