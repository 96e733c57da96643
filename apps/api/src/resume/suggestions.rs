//! Suggestion pass: asks the text-generation collaborator for improvements to
//! one experience description. Read-only with respect to the store.

use async_trait::async_trait;
use tracing::error;

use crate::llm_client::prompts::PLAIN_TEXT_LIST_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::resume::prompts::SUGGESTION_PROMPT_TEMPLATE;

/// Text-generation collaborator: prompt in, raw text out.
///
/// Carried in `AppState` as `Arc<dyn SuggestionProvider>`.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl SuggestionProvider for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate_text(prompt).await
    }
}

pub fn build_suggestion_prompt(description: &str) -> String {
    SUGGESTION_PROMPT_TEMPLATE
        .replace("{description}", description)
        .replace("{format_instruction}", PLAIN_TEXT_LIST_INSTRUCTION)
}

/// Returns improvement suggestions for `description`.
///
/// Collaborator failures are logged and yield an empty list.
pub async fn suggest_improvements(
    provider: &dyn SuggestionProvider,
    description: &str,
) -> Vec<String> {
    let prompt = build_suggestion_prompt(description);
    match provider.generate(&prompt).await {
        Ok(text) => parse_suggestions(&text),
        Err(e) => {
            error!("Suggestion generation failed: {e}");
            Vec::new()
        }
    }
}

/// One suggestion per non-empty line, with list markers stripped.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_list_marker(line.trim()).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips a leading bullet (`-`, `*`, `•`, `+`) or an enumerator (`1.`, `2)`)
/// followed by whitespace.
fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix(['-', '*', '•', '+']) {
        return rest;
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(['.', ')']) {
            // "1.5x faster" is text, not an enumerator.
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return rest;
            }
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CannedProvider {
        reply: Result<String, ()>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SuggestionProvider for CannedProvider {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    #[test]
    fn test_parse_strips_markers_and_blank_lines() {
        let text = "- Led a team of 4\n\n* Shipped v2  \n  • Cut costs\n1. Wrote docs\n2) Mentored\n+ Automated";
        assert_eq!(
            parse_suggestions(text),
            vec![
                "Led a team of 4",
                "Shipped v2",
                "Cut costs",
                "Wrote docs",
                "Mentored",
                "Automated"
            ]
        );
    }

    #[test]
    fn test_parse_keeps_unmarked_lines_and_numbers_inside_text() {
        assert_eq!(
            parse_suggestions("Reduced latency by 40%\n2022 was a big year"),
            vec!["Reduced latency by 40%", "2022 was a big year"]
        );
    }

    #[test]
    fn test_parse_keeps_leading_decimals() {
        assert_eq!(
            parse_suggestions("1.5x faster builds\n2) Cut costs\n3.2 million users served"),
            vec!["1.5x faster builds", "Cut costs", "3.2 million users served"]
        );
    }

    #[test]
    fn test_parse_handles_crlf() {
        assert_eq!(parse_suggestions("- a\r\n- b\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_prompt_embeds_description() {
        let prompt = build_suggestion_prompt("Writing Python Code");
        assert!(prompt.contains("Writing Python Code"));
        assert!(prompt.contains(PLAIN_TEXT_LIST_INSTRUCTION));
        assert!(!prompt.contains("{description}"));
    }

    #[tokio::test]
    async fn test_suggest_improvements_parses_reply() {
        let provider = CannedProvider {
            reply: Ok("- Built Python services\n- Automated tests".to_string()),
            prompts: Mutex::new(Vec::new()),
        };
        let suggestions = suggest_improvements(&provider, "Writing Python Code").await;
        assert_eq!(suggestions, vec!["Built Python services", "Automated tests"]);
        assert_eq!(provider.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_yields_empty_list() {
        let provider = CannedProvider {
            reply: Err(()),
            prompts: Mutex::new(Vec::new()),
        };
        assert!(suggest_improvements(&provider, "x").await.is_empty());
    }
}
